#![allow(dead_code)]

use std::sync::Arc;

use book_typesetter::{BookTypesetter, FixedMetrics, Pt, TypesetBook, TypesetterConfig};

/// Every character is 10pt wide and every line 10pt tall, so a page of
/// 100 x 100 holds ten lines of ten characters.
pub fn grid_typesetter(width: f32, height: f32) -> BookTypesetter {
    BookTypesetter::new(
        TypesetterConfig::for_page(Pt(width), Pt(height)),
        Arc::new(FixedMetrics::new(Pt(10.0), Pt(10.0))),
    )
}

/// Book geometry and text without any arena ids, comparable across typesetters
#[derive(Debug, PartialEq)]
pub struct LineSnapshot {
    pub page: usize,
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub text: String,
    pub hits: Vec<(isize, f32, f32, f32, f32)>,
}

pub fn snapshot(book: &TypesetBook) -> Vec<LineSnapshot> {
    let mut out = Vec::new();
    for (page_index, page) in book.pages().iter().enumerate() {
        for line in page.lines() {
            out.push(LineSnapshot {
                page: page_index,
                top: line.top.0,
                left: line.left.0,
                width: line.width.0,
                height: line.height.0,
                text: line.runs.iter().map(|run| book.text(run)).collect(),
                hits: line
                    .hits
                    .iter()
                    .map(|hit| (hit.id, hit.rect.x1.0, hit.rect.y1.0, hit.rect.x2.0, hit.rect.y2.0))
                    .collect(),
            });
        }
    }
    out
}

/// Total bytes of text laid out across every page
pub fn laid_out_bytes(book: &TypesetBook) -> usize {
    book.pages()
        .iter()
        .flat_map(|page| page.runs())
        .map(|run| run.byte_len())
        .sum()
}

/// Pages each section's lines landed on, indexed by section
pub fn pages_per_section(book: &TypesetBook) -> Vec<Vec<usize>> {
    let mut out: Vec<Vec<usize>> = Vec::new();
    for (page_index, page) in book.pages().iter().enumerate() {
        for line in page.lines() {
            if out.len() <= line.section {
                out.resize(line.section + 1, Vec::new());
            }
            let pages = &mut out[line.section];
            if pages.last() != Some(&page_index) {
                pages.push(page_index);
            }
        }
    }
    out
}
