//! Per-file TEX to bitmap conversion.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tex2bmp_bmp::encode_texture;
use tex2bmp_tex::{parse_texture, TexHeader, Texture};
use tracing::{debug, info};

use crate::{Error, Result};

/// Extension given to converted files.
pub const OUTPUT_EXTENSION: &str = "bmp";

/// A completed conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Source TEX file.
    pub input: PathBuf,
    /// Written bitmap.
    pub output: PathBuf,
    /// Image width.
    pub width: u32,
    /// Image height.
    pub height: u32,
}

/// Progress reported by [`convert_all`].
#[derive(Debug)]
pub enum BatchEvent<'a> {
    /// Conversion of `input` is starting.
    Started { input: &'a Path },
    /// Dimensions read from the header of `input`, before they are checked.
    Header {
        input: &'a Path,
        width: i32,
        height: i32,
    },
    /// Conversion succeeded.
    Converted(&'a Conversion),
    /// Conversion failed; the batch continues with the next input.
    Failed { input: &'a Path, error: &'a Error },
}

/// Outcome counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    /// True when no input failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Derive the output path for `input`.
///
/// The file name's extension is replaced with `.bmp`, or `.bmp` is appended
/// when there is none. Dots in directory names are never treated as an
/// extension. With `output_dir`, the file is placed there instead of next to
/// the input.
pub fn output_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let output = input.with_extension(OUTPUT_EXTENSION);
    match (output_dir, output.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => output,
    }
}

/// Parse TEX bytes and encode them as a bitmap.
pub fn convert_bytes(data: &[u8]) -> Result<(Texture, Vec<u8>)> {
    let texture = parse_texture(data)?;
    let bitmap = encode_texture(&texture)?;
    Ok((texture, bitmap))
}

/// Convert one TEX file, writing the bitmap beside it or into `output_dir`.
///
/// Nothing is written unless the source parsed and encoded successfully.
/// The bitmap goes to a temporary file in the destination directory that is
/// renamed into place, so a failed write leaves no partial output.
pub fn convert_file<P: AsRef<Path>>(input: P, output_dir: Option<&Path>) -> Result<Conversion> {
    convert_file_with(input.as_ref(), output_dir, |_| {})
}

/// Like [`convert_file`], handing the raw header to `on_header` as soon as it
/// has been read. Streams too short to hold a header skip the callback.
fn convert_file_with<F>(input: &Path, output_dir: Option<&Path>, on_header: F) -> Result<Conversion>
where
    F: FnOnce(TexHeader),
{
    let data = fs::read(input).map_err(|source| Error::Open {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = data.len(), "read source");

    if let Ok(header) = TexHeader::parse(&data) {
        on_header(header);
    }

    let (texture, bitmap) = convert_bytes(&data)?;

    let output = output_path_for(input, output_dir);
    write_atomic(&output, &bitmap).map_err(|source| Error::Write {
        path: output.clone(),
        source,
    })?;
    info!(
        input = %input.display(),
        output = %output.display(),
        width = texture.width(),
        height = texture.height(),
        "converted"
    );

    Ok(Conversion {
        input: input.to_path_buf(),
        output,
        width: texture.width(),
        height: texture.height(),
    })
}

/// Convert each input in order.
///
/// A failing input is reported through `on_event` and does not stop the
/// inputs after it.
pub fn convert_all<I, P, F>(inputs: I, output_dir: Option<&Path>, mut on_event: F) -> BatchSummary
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    F: FnMut(BatchEvent<'_>),
{
    let mut summary = BatchSummary::default();

    for input in inputs {
        let input = input.as_ref();
        on_event(BatchEvent::Started { input });

        let result = convert_file_with(input, output_dir, |header| {
            on_event(BatchEvent::Header {
                input,
                width: header.width,
                height: header.height,
            })
        });

        match result {
            Ok(conversion) => {
                summary.succeeded += 1;
                on_event(BatchEvent::Converted(&conversion));
            }
            Err(error) => {
                summary.failed += 1;
                on_event(BatchEvent::Failed {
                    input,
                    error: &error,
                });
            }
        }
    }

    summary
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
