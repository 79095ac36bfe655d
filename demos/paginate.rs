use std::sync::Arc;

use book_typesetter::{
    colours, Alignment, BookPage, BookTypesetter, Colour, FixedMetrics, GlyphSink, Pt,
    TypesetterConfig,
};

/// Prints every run of a page along with where it would be drawn
struct Printer;

impl GlyphSink for Printer {
    fn draw_text(&mut self, text: &str, font: &str, colour: Colour, origin: (Pt, Pt)) {
        println!(
            "  ({:>6}, {:>6}) {font:<6} rgb({:.1}, {:.1}, {:.1}) {:?}",
            origin.0.to_string(),
            origin.1.to_string(),
            colour.r,
            colour.g,
            colour.b,
            text
        );
    }
}

fn main() {
    env_logger::init();

    let metrics = FixedMetrics::new(Pt(7.0), Pt(14.0)).with_font("title", Pt(12.0), Pt(24.0));
    let mut ts = BookTypesetter::new(
        TypesetterConfig::for_page(Pt(280.0), Pt(200.0)),
        Arc::new(metrics),
    );

    let body = ts.create_style("body", colours::BLACK).expect("open typesetter");
    let title = ts.create_style("title", colours::RED).expect("open typesetter");
    let link = ts
        .create_hot_style(body, colours::BLUE, colours::RED, colours::GREEN, 1, true)
        .expect("base style exists");

    ts.set_section_alignment(Alignment::Center).expect("open typesetter");
    ts.write(title, "Lorem Ipsum").expect("valid text");
    ts.section_break(Pt(10.0)).expect("valid margin");

    for paragraph in 0..4 {
        ts.set_section_alignment(Alignment::Left).expect("open typesetter");
        ts.write(body, lipsum::lipsum(30 + paragraph * 15)).expect("valid text");
        ts.write(link, " (continued)").expect("valid text");
        ts.section_break(Pt(7.0)).expect("valid margin");
    }

    let book = Arc::new(ts.complete().expect("first completion"));
    let (width, height) = book.size();
    println!(
        "{} pages, content is {width} x {height}",
        book.page_count()
    );

    let mut view = BookPage::new();
    view.advise_link_clicked(|id| println!("clicked link {id}"));
    for index in 0..book.page_count() {
        println!("page {}:", index + 1);
        view.show_page(book.clone(), index);
        view.draw(&mut Printer);

        // click the first link on the page, if there is one
        let hit = book.page(index).and_then(|page| page.hit_regions().next());
        if let Some(hit) = hit {
            view.mouse_press(hit.rect.x1, hit.rect.y1);
            view.mouse_release(hit.rect.x1, hit.rect.y1);
        }
    }
}
