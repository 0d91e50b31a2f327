//! Headless demo: records one representative UI frame and streams it through
//! a logging backend.

mod backend;

use anyhow::{Context, Result};
use lumen_engine::atlas::{AtlasConfig, AtlasRegion, TextureAtlas};
use lumen_engine::coords::{CornerRadii, Rect, Transform2D, Vec2, Viewport};
use lumen_engine::logging::{LoggingConfig, init_logging};
use lumen_engine::mesh::{Mesh, MeshPool, MeshRef};
use lumen_engine::paint::{Color, LinearGradient, Paint};
use lumen_engine::render::submit_scene;
use lumen_engine::scene::{
    DrawOrder, Glyph, PathInstance, PointCloud, Polyline, Quad, Scene, SceneConfig, SceneError,
    SvgTile,
};

use backend::LogBackend;

const VIEWPORT: Viewport = Viewport::new(820.0, 560.0);
const SCALE: f32 = 2.0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut atlas = TextureAtlas::new(AtlasConfig { initial_size: 64, ..AtlasConfig::default() })
        .context("failed to create texture atlas")?;
    let mut meshes = MeshPool::new();
    let mut scene = Scene::with_config(SceneConfig::default()).context("failed to allocate scene")?;

    let glyphs = rasterize_glyphs(&mut atlas)?;
    let icon = atlas
        .allocate(24, 24, &checker(24, 24))
        .context("failed to cache icon")?;
    let chart = store_chart(&mut meshes);

    let mut backend = LogBackend::new(VIEWPORT, SCALE);
    for frame in 0..2 {
        scene.clear();
        record_frame(&mut scene, &glyphs, icon, &chart)?;
        scene.finish();

        let stats = submit_scene(&scene, &atlas, &meshes, &mut backend)
            .with_context(|| format!("failed to submit frame {frame}"))?;
        log::info!(
            "frame {frame}: {} primitives, {} batches, atlas rebound: {}",
            stats.primitives,
            stats.batches,
            stats.texture_bound
        );
    }

    log::info!("{} draw calls issued, {} culled", backend.draw_calls, backend.culled);
    Ok(())
}

/// Glyph tile plus its bearing, as a text shaper would hand it over.
struct CachedGlyph {
    id: u32,
    tile: AtlasRegion,
    bearing: Vec2,
    advance: f32,
}

/// Fills the atlas with stand-in coverage bitmaps for a handful of glyphs.
/// Starts small so the cache path exercises atlas growth.
fn rasterize_glyphs(atlas: &mut TextureAtlas) -> Result<Vec<CachedGlyph>> {
    (0..48u32)
        .map(|id| -> Result<CachedGlyph> {
            let (w, h) = (8 + id % 7, 12 + id % 5);
            let tile = atlas
                .allocate(w, h, &checker(w, h))
                .with_context(|| format!("failed to cache glyph {id}"))?;
            Ok(CachedGlyph {
                id,
                tile,
                bearing: Vec2::new(1.0, h as f32),
                advance: w as f32 + 2.0,
            })
        })
        .collect()
}

fn checker(w: u32, h: u32) -> Vec<u8> {
    (0..h)
        .flat_map(|y| (0..w).map(move |x| if (x + y) % 2 == 0 { 255 } else { 96 }))
        .collect()
}

struct Chart {
    marker: MeshRef,
    line: MeshRef,
    samples: MeshRef,
}

/// Geometry lives in the pool across frames; only the scene is re-recorded.
fn store_chart(meshes: &mut MeshPool) -> Chart {
    let points: Vec<Vec2> = (0..16)
        .map(|i| Vec2::new(i as f32 * 20.0, 60.0 - (i as f32 * 0.7).sin() * 40.0))
        .collect();

    let octagon: Vec<Vec2> = (0..8)
        .map(|i| {
            let a = i as f32 * std::f32::consts::FRAC_PI_4;
            Vec2::new(a.cos() * 10.0, a.sin() * 10.0)
        })
        .collect();

    Chart {
        marker: meshes.store(Mesh::from_convex_polygon(&octagon)),
        line: meshes.store(Mesh::from_points(&points)),
        samples: meshes.store(Mesh::from_points(&points)),
    }
}

/// Capacity drops are expected under load: the scene already counts and logs
/// them, so recording carries on. Allocation failure still ends the frame.
fn keep(inserted: Result<DrawOrder, SceneError>) -> Result<()> {
    match inserted {
        Ok(_) | Err(SceneError::CapacityExceeded { .. }) => Ok(()),
        Err(err) => Err(err).context("scene allocation failed"),
    }
}

fn record_frame(
    scene: &mut Scene,
    glyphs: &[CachedGlyph],
    icon: AtlasRegion,
    chart: &Chart,
) -> Result<()> {
    let panel = Rect::new(20.0, 20.0, 380.0, 240.0);
    let text = Color::from_srgb_u8(230, 230, 240, 255);

    keep(scene.insert_solid_quad(VIEWPORT.bounds(), Color::from_srgb_u8(18, 20, 28, 255)))?;
    keep(scene.insert_shadowed_quad(
        Quad::new(panel, Color::from_srgb_u8(34, 38, 52, 255))
            .with_corner_radii(CornerRadii::all(8.0)),
        Vec2::new(0.0, 4.0),
        12.0,
        Color::black().with_opacity(0.5),
    ))?;

    // Header row: icon then title text.
    keep(scene.insert_svg_tile(SvgTile::new(Rect::new(36.0, 34.0, 24.0, 24.0), icon, text)))?;
    let mut pen = Vec2::new(68.0, 52.0);
    let run = glyphs.iter().take(12).map(|g| {
        let glyph = Glyph::at_baseline(g.id, pen, g.bearing, g.tile, 1.0, text);
        pen.x += g.advance;
        glyph
    });
    let recorded = scene.insert_glyph_run(run);
    log::debug!("title: {recorded} glyphs recorded");

    // Chart body, clipped to the panel interior.
    scene.push_clip(Rect::new(32.0, 72.0, 356.0, 176.0));
    let at = Transform2D::translate(40.0, 100.0);
    keep(scene.insert_polyline(Polyline::new(chart.line, at, Color::from_srgb_u8(120, 170, 255, 255), 2.0)))?;
    keep(scene.insert_point_cloud(PointCloud::new(chart.samples, at, text, 4.0)))?;
    let fill = Paint::LinearGradient(LinearGradient::two_stop(
        Vec2::new(-10.0, -10.0),
        Vec2::new(10.0, 10.0),
        Color::from_srgb_u8(255, 190, 80, 255),
        Color::from_srgb_u8(255, 110, 60, 255),
    ));
    keep(scene.insert_path(PathInstance::new(chart.marker, Transform2D::translate(340.0, 96.0), &fill)))?;
    scene.pop_clip();

    // Button row.
    for i in 0..3 {
        let bounds = Rect::new(36.0 + i as f32 * 110.0, 212.0, 100.0, 32.0);
        keep(scene.insert_bordered_quad(
            bounds,
            CornerRadii::all(6.0),
            Color::from_srgb_u8(52, 58, 78, 255),
            1.0,
            Color::from_srgb_u8(90, 100, 130, 255),
        ))?;
        let mut pen = Vec2::new(bounds.origin.x + 12.0, bounds.origin.y + 22.0);
        let label = glyphs.iter().skip(12 + i * 6).take(6).map(|g| {
            let glyph = Glyph::at_baseline(g.id, pen, g.bearing, g.tile, 1.0, text);
            pen.x += g.advance;
            glyph
        });
        scene.insert_glyph_run(label);
    }

    // Off-screen overlay: clipped out entirely, so the backend culls it.
    scene.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
    scene.push_clip(Rect::new(600.0, 600.0, 10.0, 10.0));
    keep(scene.insert_solid_quad(Rect::new(600.0, 600.0, 10.0, 10.0), text))?;
    scene.pop_clip();
    scene.pop_clip();

    Ok(())
}
