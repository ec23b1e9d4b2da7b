// THEORY:
// The `exporter` dumps a histogram as bare numbers: each bin count in index order,
// each followed by one space. No header, no length prefix, no newline. It exists for
// debugging and for piping a signature into plotting scripts, not as a storage format.

pub mod exporter {
    use crate::core_modules::binner::binner::Frequency;
    use crate::core_modules::error::error::HistogramError;
    use std::fs::File;
    use std::io::{BufWriter, Write};
    use std::path::Path;

    /// Writes the bin counts to any sink.
    pub fn write_histogram_to<W: Write>(
        histogram: &[Frequency],
        sink: &mut W,
    ) -> Result<(), HistogramError> {
        for count in histogram {
            write!(sink, "{} ", count)?;
        }
        Ok(())
    }

    /// Writes the bin counts to `path`, creating or truncating the file.
    pub fn write_histogram<P: AsRef<Path>>(
        histogram: &[Frequency],
        path: P,
    ) -> Result<(), HistogramError> {
        let mut writer = BufWriter::new(File::create(path)?);
        write_histogram_to(histogram, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the bin counts to standard output.
    pub fn output_histogram(histogram: &[Frequency]) -> Result<(), HistogramError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_histogram_to(histogram, &mut handle)?;
        handle.flush()?;
        Ok(())
    }
}
