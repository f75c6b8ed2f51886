//! Greedy, order-preserving row packing.

use crate::types::Row;

/// Split `items` into rows no wider than `collage_width`.
///
/// Each member contributes its width plus one `padding`. A member that would
/// push the current row past `collage_width` starts a new row, unless the
/// current row is still empty: an oversized item always gets a row of its own
/// and is never split.
pub fn pack_rows<T, I, F>(items: I, collage_width: u32, padding: u32, width_of: F) -> Vec<Row<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> u32,
{
    let mut rows = Vec::new();
    let mut current: Row<T> = Row::default();

    for item in items {
        let step = width_of(&item).saturating_add(padding);
        if current.width.saturating_add(step) > collage_width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        current.width = current.width.saturating_add(step);
        current.items.push(item);
    }

    if !current.is_empty() {
        rows.push(current);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(widths: &[u32], collage_width: u32, padding: u32) -> Vec<(Vec<u32>, u32)> {
        pack_rows(widths.iter().copied(), collage_width, padding, |w| *w)
            .into_iter()
            .map(|row| (row.items, row.width))
            .collect()
    }

    #[test]
    fn test_pack_five_image_scenario() {
        // Widths at row height 174 for (300,200),(150,300),(400,100),(200,200),(600,150)
        let rows = pack(&[261, 87, 696, 174, 696], 900, 5);
        assert_eq!(
            rows,
            vec![
                (vec![261, 87], 358),
                (vec![696, 174], 880),
                (vec![696], 701),
            ]
        );
    }

    #[test]
    fn test_pack_preserves_order_and_count() {
        let widths: Vec<u32> = (1..=40).map(|i| (i * 37) % 300 + 20).collect();
        let rows = pack(&widths, 1000, 5);
        let flattened: Vec<u32> = rows.iter().flat_map(|(items, _)| items.clone()).collect();
        assert_eq!(flattened, widths);
    }

    #[test]
    fn test_pack_rows_never_exceed_width() {
        let widths: Vec<u32> = (0..100).map(|i| (i * 53) % 400 + 10).collect();
        for collage_width in [150, 451, 900, 1920] {
            for (items, width) in pack(&widths, collage_width, 5) {
                if items.len() > 1 {
                    assert!(width <= collage_width, "{width} > {collage_width}");
                }
                assert_eq!(width, items.iter().map(|w| w + 5).sum::<u32>());
            }
        }
    }

    #[test]
    fn test_pack_oversized_item_gets_own_row() {
        let rows = pack(&[100, 2000, 100], 500, 5);
        assert_eq!(
            rows,
            vec![(vec![100], 105), (vec![2000], 2005), (vec![100], 105)]
        );
    }

    #[test]
    fn test_pack_exact_fit_stays_on_row() {
        let rows = pack(&[95, 95], 200, 5);
        assert_eq!(rows, vec![(vec![95, 95], 200)]);
    }

    #[test]
    fn test_pack_empty_input() {
        assert!(pack(&[], 900, 5).is_empty());
    }
}
