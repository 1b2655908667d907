use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
    // -- Domain
    /// Similarity requested against an empty palette
    EmptyPalette,
    /// Ranking requested before a reference photo was set
    NoReference,
    // -- Externals
    #[from]
    Io(std::io::Error),
    #[from]
    Image(image::error::ImageError),
    #[from]
    HexColor(color::ParseError),
    #[from]
    Glob(glob::GlobError),
    #[from]
    GlobPattern(glob::PatternError),
}
