use std::time::Duration;

use lifegrid::draw::Canvas;
use lifegrid::draw::Display;
use lifegrid::draw::Surface;
use lifegrid::draw::TileRenderer;
use lifegrid::grid::Grid;
use lifegrid::settings::Settings;
use lifegrid::simulation::SimulationLoop;
use lifegrid::simulation::StopHandle;

/// Records the counter, and stops the loop once it shows `stop_at`
struct Counter {
    shown: Vec<String>,
    stop_at: &'static str,
    handle: Option<StopHandle>,
}

impl Display for Counter {
    fn show(&mut self, text: &str) -> lifegrid::Result<()> {
        self.shown.push(text.to_string());

        if text == self.stop_at {
            if let Some(handle) = &self.handle {
                handle.stop();
            }
        }

        Ok(())
    }
}

#[test]
fn blinker_on_a_canvas() -> anyhow::Result<()> {
    let settings = Settings::default();

    // 5 units per dot, so the canvas is 60x60 units, or 3x3 tiles
    let canvas = Canvas::new(12, 12, 5);
    let (width, height) = settings.tiles(canvas.width(), canvas.height())?;
    assert_eq!((width, height), (3, 3));

    let blinker: Grid = ".#.\n.#.\n.#.".parse()?;
    let counter = Counter {
        shown: Vec::new(),
        stop_at: "3",
        handle: None,
    };

    let renderer = TileRenderer::new(canvas, counter, settings.tile_size, settings.style);
    let mut sim = SimulationLoop::new(blinker.clone(), renderer);

    let handle = sim.stop_handle();
    sim.renderer_mut().display_mut().handle = Some(handle);

    let ticks = sim.start(Duration::from_millis(1))?;

    assert_eq!(ticks, 3);
    assert_eq!(sim.generation(), 3);
    assert_eq!(sim.renderer().display().shown, vec!["1", "2", "3"]);

    // generation 3 drew the starting blinker, then swapped in its successor
    assert_eq!(sim.grid(), &blinker.next_generation());

    let canvas = sim.renderer().surface();
    for row in 0..canvas.rows() {
        assert_eq!(canvas.glyph(2, row).ch, '\u{28FF}', "row {row}");
        assert_eq!(canvas.glyph(3, row).color, Some(settings.style.fill));
    }
    assert_eq!(canvas.glyph(0, 0).color, Some(settings.style.stroke));

    Ok(())
}

#[test]
fn stop_handle_is_shared() {
    let sim = SimulationLoop::new(
        Grid::new(2, 2),
        TileRenderer::new(
            Canvas::new(8, 8, 5),
            Counter {
                shown: Vec::new(),
                stop_at: "",
                handle: None,
            },
            20,
            Settings::default().style,
        ),
    );

    let handle = sim.stop_handle();
    assert!(!handle.is_stopped());

    handle.clone().stop();

    assert!(handle.is_stopped());
    assert!(sim.is_stopped());
}
