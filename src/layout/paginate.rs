use crate::page::{Line, Page};
use crate::units::Pt;

/// Distribute wrapped lines over pages of `page_height`.
///
/// A section that fits on a page is never split: if it would cross the bottom
/// of the current page it starts on a new one instead. Sections taller than a
/// page fill the current page and continue on as many pages as they need. A
/// line taller than the page on its own gets a page to itself.
pub(crate) fn paginate(lines: Vec<Line>, page_height: Pt) -> Vec<Page> {
    let mut pages: Vec<Page> = Vec::new();
    let mut page = Page::default();

    let mut lines = lines.into_iter().peekable();
    while let Some(first) = lines.next() {
        let section_index = first.section;
        let mut section = vec![first];
        while let Some(line) = lines.next_if(|line| line.section == section_index) {
            section.push(line);
        }

        let section_height: Pt = section.iter().map(Line::extent).sum();
        // decided once per section, so rounding in the running page height can't split it
        let fits_one_page = section_height <= page_height;
        if fits_one_page
            && !page.is_empty()
            && page.height + section_height > page_height
        {
            log::trace!(
                "section {section_index} ({section_height}) moved to page {} to keep it together",
                pages.len() + 1
            );
            pages.push(std::mem::take(&mut page));
        }

        for line in section {
            if !fits_one_page
                && !page.is_empty()
                && page.height + line.extent() > page_height
            {
                log::trace!(
                    "section {section_index} continues on page {}",
                    pages.len() + 1
                );
                pages.push(std::mem::take(&mut page));
            }
            if line.extent() > page_height {
                log::warn!(
                    "line in section {section_index} is taller than the page ({} > {page_height})",
                    line.extent()
                );
            }
            page.push_line(line);
        }
    }

    if !page.is_empty() {
        pages.push(page);
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(section: usize, margin: f32, height: f32) -> Line {
        Line {
            top: Pt::ZERO,
            margin: Pt(margin),
            height: Pt(height),
            left: Pt::ZERO,
            width: Pt::ZERO,
            section,
            runs: Vec::new(),
            hits: Vec::new(),
        }
    }

    fn sections_per_page(pages: &[Page]) -> Vec<Vec<usize>> {
        pages
            .iter()
            .map(|p| p.lines.iter().map(|l| l.section).collect())
            .collect()
    }

    #[test]
    fn nothing_to_paginate() {
        assert!(paginate(Vec::new(), Pt(100.0)).is_empty());
    }

    #[test]
    fn small_sections_share_a_page() {
        let lines = vec![line(0, 0.0, 20.0), line(1, 10.0, 20.0), line(2, 0.0, 20.0)];
        let pages = paginate(lines, Pt(100.0));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].height, Pt(70.0));
        assert_eq!(pages[0].lines[1].top, Pt(30.0));
    }

    #[test]
    fn section_moves_to_keep_together() {
        let lines = vec![
            line(0, 0.0, 30.0),
            line(0, 0.0, 30.0),
            line(1, 0.0, 30.0),
            line(1, 0.0, 30.0),
        ];
        let pages = paginate(lines, Pt(100.0));
        assert_eq!(sections_per_page(&pages), vec![vec![0, 0], vec![1, 1]]);
        assert_eq!(pages[0].height, Pt(60.0));
    }

    #[test]
    fn long_sections_flow_across_pages() {
        let lines: Vec<Line> = (0..5).map(|_| line(0, 0.0, 30.0)).collect();
        let pages = paginate(lines, Pt(100.0));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines.len(), 3);
        assert_eq!(pages[1].lines.len(), 2);
        assert_eq!(pages[1].lines[0].top, Pt(0.0));
    }

    #[test]
    fn margins_apply_at_the_top_of_a_page() {
        let lines = vec![line(0, 0.0, 90.0), line(1, 15.0, 20.0)];
        let pages = paginate(lines, Pt(100.0));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].lines[0].top, Pt(15.0));
        assert_eq!(pages[1].height, Pt(35.0));
    }

    #[test]
    fn exactly_fitting_section_with_fractional_sizes_stays_whole() {
        for (margin, height) in [(0.5, 7.2), (1.0, 2.1), (0.3, 3.3), (0.7, 11.9)] {
            let lines: Vec<Line> = (0..3).map(|_| line(0, margin, height)).collect();
            let page_height: Pt = lines.iter().map(Line::extent).sum();
            let pages = paginate(lines, page_height);
            assert_eq!(
                pages.len(),
                1,
                "lines of {margin} + {height} on a {page_height} page"
            );
            assert_eq!(pages[0].lines.len(), 3);
        }
    }

    #[test]
    fn fractional_section_after_another_moves_whole() {
        let mut lines = vec![line(0, 0.0, 4.6)];
        lines.extend((0..3).map(|_| line(1, 0.5, 7.2)));
        let page_height: Pt = lines[1..].iter().map(Line::extent).sum();
        let pages = paginate(lines, page_height);
        assert_eq!(sections_per_page(&pages), vec![vec![0], vec![1, 1, 1]]);
    }

    #[test]
    fn oversized_line_gets_its_own_page() {
        let lines = vec![line(0, 0.0, 10.0), line(1, 0.0, 250.0), line(2, 0.0, 10.0)];
        let pages = paginate(lines, Pt(100.0));
        assert_eq!(sections_per_page(&pages), vec![vec![0], vec![1], vec![2]]);
        assert_eq!(pages[1].height, Pt(250.0));
    }
}
