use jasmine_core::{JasmineResult, SkyCoordinate};
use jasmine_hips::selection::{Selection, SelectionDispatcher, WindowMode};
use jasmine_hips::survey::SurveyLayout;
use jasmine_hips::tiling::{PixelTracker, TileResolver};
use std::sync::mpsc::{channel, Sender};
use std::thread;

fn main() -> anyhow::Result<()> {
    let base = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:5173/surveys/TNG100-99/".to_string());
    let layout = SurveyLayout::new(base);
    let resolver = TileResolver::new();

    let coord = SkyCoordinate::new(83.633, -5.375)?;
    let tile = resolver.resolve(&coord, 3, 1)?;
    println!("{}", coord);
    println!(
        "  coarse pixel {} at order {}, row {} of the tile",
        tile.coarse_pixel, tile.order, tile.tile_line()
    );

    // Sweep along the equator and report every time the cursor enters a new pixel.
    let mut tracker = PixelTracker::new();
    println!("\nPixel changes along the equator at order 1:");
    for step in 0..36 {
        let ra = step as f64 * 10.0;
        if let Some(pixel) = tracker.update(&SkyCoordinate::new(ra, 0.0)?, 1)? {
            println!("  RA {:>5.1}°  pixel {}", ra, pixel);
        }
    }

    let mut viewers = Vec::new();
    let factory = || -> JasmineResult<Sender<Selection>> {
        let (tx, rx) = channel::<Selection>();
        viewers.push(thread::spawn(move || {
            for selection in rx {
                println!("  viewer got {}", selection.to_json().unwrap_or_default());
            }
        }));
        Ok(tx)
    };
    let mut dispatcher = SelectionDispatcher::new(WindowMode::Single, factory);

    println!("\nClicks:");
    for (ra, dec) in [(83.633, -5.375), (10.684, 41.269), (201.365, -43.019)] {
        let selection = layout.select(&resolver, &SkyCoordinate::new(ra, dec)?, 3, 1)?;
        dispatcher.dispatch(selection)?;
    }
    drop(dispatcher);

    for viewer in viewers {
        let _ = viewer.join();
    }

    Ok(())
}
