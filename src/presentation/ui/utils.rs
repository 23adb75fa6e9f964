use ratatui::layout::Rect;

/// Centers a fixed-size box, clamped to `r`.
#[must_use]
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed_clamps() {
        let parent = Rect::new(2, 2, 20, 10);
        assert_eq!(centered_fixed(10, 4, parent), Rect::new(7, 5, 10, 4));
        assert_eq!(centered_fixed(50, 50, parent), parent);
    }
}
