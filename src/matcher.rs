use std::path::Path;

use image::Rgb;
use itertools::Itertools;

use crate::{Args, Error, Result};

use session::{ImageRecord, ReferenceImage, Session};

mod color_ops;
mod extraction;
mod session;
mod similarity;

pub struct PaletteMatcher {
    threshold: f32,
    palette_size: u8,
    pub verbose: bool,
}

impl PaletteMatcher {
    pub fn new(args: &Args) -> Self {
        Self {
            threshold: args.threshold,
            palette_size: args.palette_size,
            verbose: args.verbose,
        }
    }

    pub fn process(&self, patterns: &[String], reference: &Path) -> Result<()> {
        let mut session = Session::new();

        // Extraction is synchronous per file, so the store never holds a
        // half-extracted image when ranking runs
        for pattern in patterns {
            for file in glob::glob(pattern)? {
                self.store_image(&mut session, &file?);
            }
        }
        if session.store().is_empty() {
            eprintln!("no readable images supplied, nothing to rank");
            return Ok(());
        }
        println!("stored {} images", session.store().len());

        self.set_reference(&mut session, reference)?;
        if self.verbose {
            for (id, score) in session.scores()? {
                println!("{id}: score {score:.2}");
            }
        }

        let matches = session.rank(self.threshold)?;
        if matches.is_empty() {
            println!("No matches found");
            return Ok(());
        }
        println!(
            "{} matches below threshold {}",
            matches.len(),
            self.threshold
        );
        for (rank, m) in matches.iter().enumerate() {
            println!(
                "{:>3}. {} ({}) score {:.2} - {}",
                rank + 1,
                m.record.name,
                m.id,
                m.score,
                m.record.palette.iter().map(color_ops::to_hex).join(" "),
            );
        }
        Ok(())
    }

    /// Extract a palette from one folder image and store it in the session.
    /// A failed extraction skips that image instead of aborting the batch.
    fn store_image(&self, session: &mut Session, file: &Path) {
        match self.extract_palette(file) {
            Ok(palette) => {
                let record = ImageRecord {
                    name: display_name(file),
                    palette,
                    source: file.to_owned(),
                };
                let id = session.add_image(record);
                if self.verbose {
                    println!("{}: stored as {id}", file.display());
                }
            }
            Err(error) => {
                eprintln!("{}: skipped ({error:?})", file.display());
            }
        }
    }

    /// Extract the reference photo's palette and set it on the session
    fn set_reference(&self, session: &mut Session, file: &Path) -> Result<()> {
        let palette = self.extract_palette(file)?;
        if self.verbose {
            println!(
                "{}: reference palette {}",
                file.display(),
                palette.iter().map(color_ops::to_hex).join(" "),
            );
        }
        session.set_reference(ReferenceImage {
            name: display_name(file),
            palette,
            source: file.to_owned(),
        });
        Ok(())
    }

    /// Open an image file and extract its dominant-color palette
    fn extract_palette(&self, file: &Path) -> Result<Vec<Rgb<u8>>> {
        let image = image::open(file)?;
        let palette = extraction::extract_palette(&image, self.palette_size);
        if palette.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(palette)
    }
}

fn display_name(file: &Path) -> String {
    match file.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => file.display().to_string(),
    }
}
