//! Image output: the status map (PNG) and the plant artwork (SVG).

use anyhow::Result;
use plantsim_core::{
    analysis::StatusMap,
    presentation::{
        labels, status_label,
        theme::{self, theme_for, PlantTheme},
        Locale,
    },
};
use plantsim_schemas::{PlantState, PlantStatus};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

type Point = (f64, f64);

/// The artwork is drawn on a 200×200 canvas and scaled up.
const CANVAS: f64 = 200.0;
const SCALE: f64 = 3.0;
/// Where the stem meets the soil; growth and tilt pivot here.
const PIVOT: Point = (100.0, 170.0);

/// Leaf anchors on the canvas: (x, y, rotation in degrees, scale).
const LEAVES: [(f64, f64, f64, f64); 6] = [
    (98.0, 145.0, -45.0, 1.0),
    (102.0, 145.0, 225.0, 1.0),
    (70.0, 105.0, -15.0, 0.9),
    (98.0, 95.0, -60.0, 0.8),
    (102.0, 95.0, 240.0, 0.8),
    (98.0, 55.0, -75.0, 0.7),
];
/// Fruit centres and radii.
const FRUITS: [(f64, f64, f64); 3] = [(85.0, 115.0, 6.0), (115.0, 85.0, 5.0), (90.0, 50.0, 6.0)];
/// Flower centres and radii.
const FLOWERS: [(f64, f64, f64); 3] = [(110.0, 125.0, 6.0), (70.0, 80.0, 5.0), (115.0, 50.0, 6.0)];
const FALLEN_FLOWER_Y: f64 = 166.0;

fn rgb(color: theme::Color) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Map palette: one distinct colour per status.
fn map_color(status: PlantStatus) -> RGBColor {
    match status {
        PlantStatus::Frozen => RGBColor(0x93, 0xC5, 0xFD),
        PlantStatus::Wilted => RGBColor(0xCA, 0x8A, 0x04),
        PlantStatus::Dried => RGBColor(0xC2, 0x41, 0x0C),
        PlantStatus::Broken => RGBColor(0x6B, 0x72, 0x80),
        PlantStatus::Fruiting => RGBColor(0xEC, 0x48, 0x99),
        PlantStatus::Windy => RGBColor(0x94, 0xA3, 0xB8),
        PlantStatus::Healthy => RGBColor(0x16, 0xA3, 0x4A),
    }
}

/// Draws the temperature × water classification grid.
pub fn plot_status_map(output_dir: &Path, map: &StatusMap, locale: Locale) -> Result<PathBuf> {
    let path = output_dir.join(format!("status_map_wind_{}.png", map.wind));
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let (t0, t1) = map.temperature_range;
    let (w0, w1) = map.water_range;
    let step = map.step;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Plant status at wind {} km/h", map.wind),
            ("sans-serif", 40).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(t0..t1 + step, w0..w1 + step)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Temperature (°C)")
        .y_desc("Water (%)")
        .draw()?;

    for (status, _) in map.counts() {
        let color = map_color(status);
        chart
            .draw_series(map.cells.iter().filter(|c| c.status == status).map(|c| {
                Rectangle::new(
                    [(c.temperature, c.water), (c.temperature + step, c.water + step)],
                    color.filled(),
                )
            }))?
            .label(status_label(status, locale))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    tracing::info!("Status map written to {:?}", path);
    Ok(path.clone())
}

/// Draws the plant for `plant` as an SVG file and returns its path.
pub fn render_plant(output_dir: &Path, plant: PlantState, locale: Locale) -> Result<PathBuf> {
    let path = output_dir.join(format!("plant_{}.svg", plant.status));
    let size = (CANVAS * SCALE) as u32;
    let root = SVGBackend::new(&path, (size, size)).into_drawing_area();
    root.fill(&RGBColor(0xE0, 0xF2, 0xFE))?;

    let look = theme_for(plant.status);
    let pose = Pose {
        growth: plant.growth,
        tilt_deg: look.stem_rotation_deg,
    };

    draw_pot(&root)?;
    draw_stems(&root, &look, pose)?;
    draw_leaves(&root, &look, pose)?;
    if look.fruits_visible {
        draw_fruits(&root, pose)?;
    }
    if look.flowers_visible {
        draw_flowers(&root, &look, pose)?;
    }
    if look.frost {
        root.draw(&Rectangle::new(
            [(0, 0), (size as i32, to_px(PIVOT).1)],
            RGBColor(0xDB, 0xEA, 0xFE).mix(0.45).filled(),
        ))?;
    }

    let label_color = rgb(look.label);
    let label_style = TextStyle::from(("sans-serif", 28).into_font()).color(&label_color);
    root.draw(&Text::new(
        status_label(plant.status, locale).to_string(),
        (size as i32 - 160, 20),
        label_style,
    ))?;
    let title_style = TextStyle::from(("sans-serif", 16).into_font()).color(&BLACK);
    root.draw(&Text::new(labels::title(locale).to_string(), (12, 20), title_style))?;

    root.present()?;
    tracing::info!("Plant rendered to {:?}", path);
    Ok(path.clone())
}

#[derive(Debug, Clone, Copy)]
struct Pose {
    growth: f64,
    tilt_deg: f64,
}

impl Pose {
    /// Scales about the pivot by growth, then tilts clockwise.
    fn apply(self, p: Point) -> Point {
        let scaled = (
            PIVOT.0 + (p.0 - PIVOT.0) * self.growth,
            PIVOT.1 + (p.1 - PIVOT.1) * self.growth,
        );
        rotate_about(scaled, PIVOT, self.tilt_deg)
    }
}

fn rotate_about(p: Point, center: Point, deg: f64) -> Point {
    let (sin, cos) = deg.to_radians().sin_cos();
    let (dx, dy) = (p.0 - center.0, p.1 - center.1);
    (center.0 + dx * cos - dy * sin, center.1 + dx * sin + dy * cos)
}

fn cubic(p0: Point, c1: Point, c2: Point, p3: Point, samples: usize) -> Vec<Point> {
    (0..=samples)
        .map(|i| {
            let t = i as f64 / samples as f64;
            let u = 1.0 - t;
            let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
            (
                a * p0.0 + b * c1.0 + c * c2.0 + d * p3.0,
                a * p0.1 + b * c1.1 + c * c2.1 + d * p3.1,
            )
        })
        .collect()
}

fn to_px(p: Point) -> (i32, i32) {
    ((p.0 * SCALE).round() as i32, (p.1 * SCALE).round() as i32)
}

fn stem_path() -> Vec<Point> {
    let mut points = cubic((100.0, 170.0), (105.0, 140.0), (95.0, 120.0), (100.0, 80.0), 16);
    points.extend(cubic((100.0, 80.0), (105.0, 40.0), (105.0, 50.0), (100.0, 40.0), 12).into_iter().skip(1));
    points
}

fn branch_path() -> Vec<Point> {
    cubic((100.0, 130.0), (90.0, 125.0), (80.0, 110.0), (70.0, 100.0), 12)
}

/// Outline of a leaf pointing along +x from its anchor, before placement.
fn leaf_outline() -> Vec<Point> {
    let mut points = cubic((0.0, 0.0), (15.0, -15.0), (30.0, -15.0), (45.0, 0.0), 10);
    points.extend(cubic((45.0, 0.0), (30.0, 15.0), (15.0, 15.0), (0.0, 0.0), 10).into_iter().skip(1));
    points
}

fn place_leaf(p: Point, anchor: (f64, f64, f64, f64), wilted: bool) -> Point {
    let (x, y, rotation, scale) = anchor;
    let droop = if wilted { 30.0 } else { 0.0 };
    let local = rotate_about((p.0 * scale, p.1 * scale), (0.0, 0.0), rotation + droop);
    (x + local.0, y + local.1)
}

fn draw_pot<DB: DrawingBackend>(root: &DrawingArea<DB, plotters::coord::Shift>) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let body = [(60.0, 180.0), (70.0, 195.0), (130.0, 195.0), (140.0, 180.0)];
    let rim = [(58.0, 170.0), (142.0, 170.0), (138.0, 180.0), (62.0, 180.0)];
    root.draw(&Polygon::new(body.iter().map(|p| to_px(*p)).collect::<Vec<_>>(), rgb(theme::POT_LIGHT).filled()))?;
    root.draw(&Polygon::new(rim.iter().map(|p| to_px(*p)).collect::<Vec<_>>(), rgb(theme::POT_DARK).filled()))?;
    Ok(())
}

fn draw_stems<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    look: &PlantTheme,
    pose: Pose,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let stem = rgb(look.stem);
    for (path, width) in [(stem_path(), 6.0), (branch_path(), 4.0)] {
        let points = path.into_iter().map(|p| to_px(pose.apply(p))).collect::<Vec<_>>();
        let width = (width * SCALE * pose.growth).round() as u32;
        root.draw(&PathElement::new(points, stem.stroke_width(width)))?;
    }
    Ok(())
}

fn draw_leaves<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    look: &PlantTheme,
    pose: Pose,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let outline = leaf_outline();
    for (i, anchor) in LEAVES.iter().enumerate() {
        let fill = if i % 2 == 0 { look.leaf_dark } else { look.leaf_light };
        let points = outline
            .iter()
            .map(|p| to_px(pose.apply(place_leaf(*p, *anchor, look.leaves_wilted))))
            .collect::<Vec<_>>();
        root.draw(&Polygon::new(points, rgb(fill).filled()))?;

        let vein = [(2.0, 0.0), (43.0, 0.0)]
            .iter()
            .map(|p| to_px(pose.apply(place_leaf(*p, *anchor, look.leaves_wilted))))
            .collect::<Vec<_>>();
        root.draw(&PathElement::new(vein, rgb(look.leaf_vein).mix(0.6).stroke_width(2)))?;
    }
    Ok(())
}

fn draw_fruits<DB: DrawingBackend>(root: &DrawingArea<DB, plotters::coord::Shift>, pose: Pose) -> Result<()>
where
    DB::ErrorType: 'static,
{
    for (x, y, r) in FRUITS {
        let center = to_px(pose.apply((x, y)));
        let radius = (r * SCALE * pose.growth).round() as i32;
        root.draw(&Circle::new(center, radius, rgb(theme::FRUIT_DARK).filled()))?;
        root.draw(&Circle::new(center, radius / 2, rgb(theme::FRUIT_LIGHT).mix(0.8).filled()))?;
    }
    Ok(())
}

fn draw_flowers<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    look: &PlantTheme,
    pose: Pose,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    for (x, y, r) in FLOWERS {
        // falling flowers are drawn where they land
        let center = if look.flowers_falling {
            to_px((x, FALLEN_FLOWER_Y))
        } else {
            to_px(pose.apply((x, y)))
        };
        let radius = (r * SCALE * pose.growth).round() as i32;
        let petals = [(0, -radius), (radius, 0), (0, radius), (-radius, 0)]
            .iter()
            .map(|(dx, dy)| (center.0 + dx, center.1 + dy))
            .collect::<Vec<_>>();
        let opacity = if look.flowers_falling { 0.5 } else { 1.0 };
        root.draw(&Polygon::new(petals, rgb(theme::FLOWER).mix(opacity).filled()))?;
        root.draw(&Circle::new(center, (radius / 3).max(1), rgb(theme::FLOWER_CENTER).filled()))?;
    }
    Ok(())
}
