use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Result;
use csv::Writer;
use image::{GrayImage, Luma};
use petri_core::{Cell, Grid};

/// Snapshot writer for grid images and live-cell dumps
pub struct SnapshotWriter {
    output_dir: PathBuf,
    cell_px: u32,
}

impl SnapshotWriter {
    /// Create a new snapshot writer scaling each cell to `cell_px` pixels
    pub fn new(output_dir: &Path, cell_px: u32) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            cell_px: cell_px.max(1),
        }
    }

    /// Write the grid as a grayscale PNG, living cells white on black
    pub fn write_grid_snapshot(&self, step: u32, grid: &Grid) -> Result<()> {
        let filename = format!("gen_{:04}.png", step);
        let filepath = self.output_dir.join(filename);

        let px = self.cell_px;
        let mut img = GrayImage::new((grid.width() * px).max(1), (grid.height() * px).max(1));
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let value = match grid.get(i64::from(y / px), i64::from(x / px)) {
                Cell::Alive => 255u8,
                Cell::Dead => 0,
            };
            *pixel = Luma([value]);
        }
        img.save(&filepath)?;

        Ok(())
    }

    /// Write the coordinates of every living cell to CSV
    pub fn write_cells_snapshot(&self, step: u32, grid: &Grid) -> Result<()> {
        let filename = format!("cells_{:04}.csv", step);
        let filepath = self.output_dir.join(filename);

        let file = File::create(filepath)?;
        let mut csv_writer = Writer::from_writer(file);
        csv_writer.write_record(["row", "col"])?;

        for row in 0..i64::from(grid.height()) {
            for col in 0..i64::from(grid.width()) {
                if grid.get(row, col).is_alive() {
                    csv_writer.write_record([row.to_string(), col.to_string()])?;
                }
            }
        }

        csv_writer.flush()?;

        Ok(())
    }
}
