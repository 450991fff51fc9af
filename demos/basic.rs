// Example: a simulated scroll container driving a vertical 4-wide grid.
use line_recycler::{ItemBinder, Position, Recycler, RecyclerOptions, Size};

struct CardTemplate;

#[derive(Debug, Default)]
struct CardVisual {
    label: Option<String>,
}

impl ItemBinder for CardTemplate {
    type Item = String;
    type Visual = CardVisual;

    fn instantiate(&self, _line_number: u32, _slot: usize) -> CardVisual {
        CardVisual::default()
    }

    fn bind(&self, visual: &mut CardVisual, item: Option<&String>) {
        visual.label = item.cloned();
    }

    fn measure(&self) -> Size {
        Size::new(100.0, 100.0)
    }
}

fn main() {
    let options = RecyclerOptions::new(Size::new(450.0, 220.0)).with_slots_per_line(4);
    let mut recycler = Recycler::new(options);

    let items: Vec<String> = (0..1_000).map(|i| format!("card {i}")).collect();
    recycler
        .initialize(CardTemplate, items, false)
        .expect("valid configuration");

    println!("content_size={:?}", recycler.content_size());
    println!(
        "total_lines={} visible_lines={}",
        recycler.total_line_count(),
        recycler.visible_line_count()
    );

    // Scroll forward 25 line extents in uneven steps, as a fling would.
    let extent = recycler.element_extent_with_spacing();
    for step in [0.3, 2.0, 7.5, 25.0] {
        recycler.set_scroll_position(Position::new(0.0, step * extent));
    }

    println!(
        "first_visible={} created={} recycled={}",
        recycler.first_visible_line(),
        recycler.lines_created(),
        recycler.lines_recycled()
    );
    recycler.for_each_line(|line| {
        let labels: Vec<_> = line
            .slots()
            .iter()
            .map(|slot| slot.label.as_deref().unwrap_or("-"))
            .collect();
        println!(
            "line #{:<2} active={} y={:>8.1} {:?}",
            line.number(),
            line.is_active(),
            line.position().y,
            labels
        );
    });
}
