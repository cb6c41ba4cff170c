//! Host-level tests for the raster layer: what goes over the wire for each primitive.

use matrix_snake::{BitMatrix, Error, Point, Raster, RowWrite, VirtualMatrix};

fn raster() -> Raster<VirtualMatrix> {
    Raster::new(VirtualMatrix::new())
}

fn writes(raster: &Raster<VirtualMatrix>) -> Vec<RowWrite> {
    raster.sink().writes().copied().collect()
}

fn write(row: u8, bits: u8) -> RowWrite {
    RowWrite { row, bits }
}

/// Cells lit by each write of a line, in write order.
fn plotted(raster: &Raster<VirtualMatrix>) -> Vec<(u8, u8)> {
    raster
        .sink()
        .writes()
        .map(|write| (write.row, write.bits.trailing_zeros() as u8))
        .collect()
}

#[test]
fn set_pixel_is_one_write() {
    let mut raster = raster();
    raster.set_pixel(2, 5).unwrap();
    assert_eq!(writes(&raster), [write(2, 0b_0010_0000)]);
    assert!(raster.sink().bit_matrix().is_lit(Point::new(2, 5).unwrap()));
}

#[test]
fn set_pixel_replaces_the_row() {
    let mut raster = raster();
    raster.set_pixel(4, 0).unwrap();
    raster.set_pixel(4, 7).unwrap();
    assert_eq!(raster.sink().bit_matrix()[4], 0b_1000_0000);
}

#[test]
fn off_matrix_pixels_and_rows_are_errors() {
    let mut raster = raster();
    assert!(matches!(
        raster.set_pixel(8, 0),
        Err(Error::PixelOutOfBounds { row: 8, col: 0 })
    ));
    assert!(matches!(
        raster.set_pixel(0, 8),
        Err(Error::PixelOutOfBounds { row: 0, col: 8 })
    ));
    assert!(matches!(
        raster.fill_row(9, 0xFF),
        Err(Error::RowOutOfBounds { row: 9 })
    ));
    assert_eq!(raster.sink().write_count(), 0);
}

#[test]
fn fill_row_writes_bits_verbatim() {
    let mut raster = raster();
    raster.fill_row(6, 0b_0101_1010).unwrap();
    assert_eq!(writes(&raster), [write(6, 0b_0101_1010)]);
}

#[test]
fn clear_and_fill_go_top_to_bottom() {
    let mut raster = raster();
    raster.fill().unwrap();
    raster.clear().unwrap();
    let expected: Vec<RowWrite> = (0..8)
        .map(|row| write(row, 0xFF))
        .chain((0..8).map(|row| write(row, 0x00)))
        .collect();
    assert_eq!(writes(&raster), expected);
    assert_eq!(*raster.sink().bit_matrix(), BitMatrix::default());
}

#[test]
fn draw_bitmap_writes_each_row_in_order() {
    let mut raster = raster();
    let rows = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80];
    raster.draw_bitmap(&rows).unwrap();
    let expected: Vec<RowWrite> = (0..8).zip(rows).map(|(row, bits)| write(row, bits)).collect();
    assert_eq!(writes(&raster), expected);
    assert_eq!(raster.sink().bit_matrix().rows(), &rows);
}

#[test]
fn draw_bit_matrix_matches_draw_bitmap() {
    let mut bit_matrix = BitMatrix::default();
    bit_matrix.set(Point::new(0, 0).unwrap());
    bit_matrix.set(Point::new(7, 7).unwrap());

    let mut raster = raster();
    raster.draw_bit_matrix(&bit_matrix).unwrap();
    assert_eq!(raster.sink().write_count(), 8);
    assert_eq!(*raster.sink().bit_matrix(), bit_matrix);
}

#[test]
fn horizontal_line_is_one_write() {
    let mut raster = raster();
    raster.draw_line((3, 1), (3, 4)).unwrap();
    assert_eq!(writes(&raster), [write(3, 0b_0001_1110)]);

    let mut reversed = self::raster();
    reversed.draw_line((3, 4), (3, 1)).unwrap();
    assert_eq!(writes(&reversed), [write(3, 0b_0001_1110)]);
}

#[test]
fn horizontal_line_clips_columns() {
    let mut raster = raster();
    raster.draw_line((5, 6), (5, 12)).unwrap();
    assert_eq!(writes(&raster), [write(5, 0b_1100_0000)]);

    let mut off_matrix = self::raster();
    off_matrix.draw_line((9, 0), (9, 7)).unwrap();
    assert_eq!(off_matrix.sink().write_count(), 0);
}

#[test]
fn vertical_line_is_one_write_per_row() {
    let mut raster = raster();
    raster.draw_line((1, 2), (4, 2)).unwrap();
    let expected: Vec<RowWrite> = (1..=4).map(|row| write(row, 0b_0000_0100)).collect();
    assert_eq!(writes(&raster), expected);

    // A reversed vertical line still writes top to bottom.
    let mut reversed = self::raster();
    reversed.draw_line((4, 2), (1, 2)).unwrap();
    assert_eq!(writes(&reversed), expected);
}

#[test]
fn vertical_line_clips_rows() {
    let mut raster = raster();
    raster.draw_line((6, 3), (10, 3)).unwrap();
    assert_eq!(writes(&raster), [write(6, 0b_1000), write(7, 0b_1000)]);

    let mut off_matrix = self::raster();
    off_matrix.draw_line((0, 8), (7, 8)).unwrap();
    assert_eq!(off_matrix.sink().write_count(), 0);
}

#[test]
fn diagonal_is_symmetric() {
    let mut forward = raster();
    forward.draw_line((0, 0), (7, 7)).unwrap();
    let mut backward = raster();
    backward.draw_line((7, 7), (0, 0)).unwrap();

    let mut forward_cells = plotted(&forward);
    let mut backward_cells = plotted(&backward);
    assert_eq!(forward_cells.len(), 8);
    forward_cells.sort_unstable();
    backward_cells.sort_unstable();
    assert_eq!(forward_cells, backward_cells);
    assert_eq!(
        forward_cells,
        (0..8).map(|index| (index, index)).collect::<Vec<_>>()
    );
}

#[test]
fn line_past_the_edge_only_plots_on_matrix_cells() {
    let mut raster = raster();
    raster.draw_line((0, 0), (10, 10)).unwrap();
    let cells = plotted(&raster);
    assert_eq!(cells, (0..8).map(|index| (index, index)).collect::<Vec<_>>());
}

#[test]
fn line_entering_the_matrix_is_drawn_from_the_edge() {
    let mut raster = raster();
    raster.draw_line((9, 0), (0, 9)).unwrap();
    let cells = plotted(&raster);
    assert!(cells.iter().all(|&(row, col)| row < 8 && col < 8));
    assert_eq!(cells.len(), 6);
    assert_eq!(cells.first(), Some(&(7, 2)));
    assert_eq!(cells.last(), Some(&(2, 7)));
}

#[test]
fn general_line_is_one_write_per_cell() {
    let mut raster = raster();
    raster.draw_line((0, 0), (2, 6)).unwrap();
    let cells = plotted(&raster);
    assert_eq!(cells.len(), 7);
    assert_eq!(cells.first(), Some(&(0, 0)));
    assert_eq!(cells.last(), Some(&(2, 6)));
}
