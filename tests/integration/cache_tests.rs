//! Fragment-cache behavior: staleness, reset, policy, and load counts.

use anyhow::Result;
use serde_json::json;
use smarty_views::{RenderOptions, Renderer, Settings};

use super::common::ViewFixture;

#[tokio::test]
async fn cached_partials_are_reproducibly_stale() -> Result<()> {
    let views = ViewFixture::new()?;
    let index = views
        .write("index.smarty", "{include file=\"p3.smarty\"}")
        .await?;
    views.write("p3.smarty", "Version 1").await?;

    let renderer = Renderer::new(Some(views.path().to_path_buf()));
    assert_eq!(renderer.render(&index, &RenderOptions::new()).await?, "Version 1");

    // Storage changed, but without a reset the second render must
    // reproduce the first render's output.
    views.write("p3.smarty", "Version 2").await?;
    assert_eq!(renderer.render(&index, &RenderOptions::new()).await?, "Version 1");
    Ok(())
}

#[tokio::test]
async fn cache_reset_forces_a_reread() -> Result<()> {
    let views = ViewFixture::new()?;
    let index = views
        .write("index.smarty", "{include file=\"p3.smarty\"}")
        .await?;
    views.write("p3.smarty", "Version 1").await?;

    let renderer = Renderer::new(Some(views.path().to_path_buf()));
    assert_eq!(renderer.render(&index, &RenderOptions::new()).await?, "Version 1");

    views.write("p3.smarty", "Version 2").await?;
    renderer.cache().expect("cache attached").lock().await.reset();

    assert_eq!(renderer.render(&index, &RenderOptions::new()).await?, "Version 2");
    Ok(())
}

#[tokio::test]
async fn view_cache_false_disables_caching_per_render() -> Result<()> {
    let views = ViewFixture::new()?;
    let index = views
        .write("index.smarty", "{include file=\"p3.smarty\"}")
        .await?;
    views.write("p3.smarty", "Version 1").await?;

    let renderer = Renderer::new(Some(views.path().to_path_buf()));
    let uncached = RenderOptions::new().with_settings(Settings {
        view_cache: Some(false),
        ..Settings::default()
    });

    assert_eq!(renderer.render(&index, &uncached).await?, "Version 1");
    views.write("p3.smarty", "Version 2").await?;
    assert_eq!(renderer.render(&index, &uncached).await?, "Version 2");

    // Nothing was cached along the way.
    let cache = renderer.cache().expect("cache attached");
    assert!(cache.lock().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn detaching_the_cache_disables_caching() -> Result<()> {
    let views = ViewFixture::new()?;
    let index = views
        .write("index.smarty", "{include file=\"p3.smarty\"}")
        .await?;
    views.write("p3.smarty", "Version 1").await?;

    let mut renderer = Renderer::new(Some(views.path().to_path_buf()));
    renderer.detach_cache();

    assert_eq!(renderer.render(&index, &RenderOptions::new()).await?, "Version 1");
    views.write("p3.smarty", "Version 2").await?;
    assert_eq!(renderer.render(&index, &RenderOptions::new()).await?, "Version 2");
    Ok(())
}

#[tokio::test]
async fn cache_policy_never_changes_output() -> Result<()> {
    let views = ViewFixture::new()?;
    let index = views
        .write(
            "index.smarty",
            "Hey, {name}\n{include file=\"p1.smarty\"}{include file=\"p2.smarty\"}",
        )
        .await?;
    views
        .write("p1.smarty", "{include file=\"p2.smarty\"} and ")
        .await?;
    views.write("p2.smarty", "shared").await?;

    let options = RenderOptions::new().variable("name", json!("World"));
    let uncached_options = RenderOptions::new()
        .variable("name", json!("World"))
        .with_settings(Settings {
            view_cache: Some(false),
            ..Settings::default()
        });

    let renderer = Renderer::new(Some(views.path().to_path_buf()));
    let cached = renderer.render(&index, &options).await?;
    let warm = renderer.render(&index, &options).await?;
    let uncached = renderer.render(&index, &uncached_options).await?;

    assert_eq!(cached, warm);
    assert_eq!(cached, uncached);
    Ok(())
}

#[tokio::test]
async fn second_render_is_served_from_the_cache() -> Result<()> {
    let views = ViewFixture::new()?;
    let index = views
        .write("index.smarty", "{include file=\"p1.smarty\"}{include file=\"p2.smarty\"}")
        .await?;
    views.write("p1.smarty", "one").await?;
    views.write("p2.smarty", "two").await?;

    let renderer = Renderer::new(Some(views.path().to_path_buf()));
    renderer.render(&index, &RenderOptions::new()).await?;

    let cache = renderer.cache().expect("cache attached");
    assert_eq!(cache.lock().await.stats(), (0, 3));

    renderer.render(&index, &RenderOptions::new()).await?;
    assert_eq!(cache.lock().await.stats(), (3, 3));
    Ok(())
}
