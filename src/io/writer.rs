// src/io/writer.rs
use std::fs::File;
use std::io::{self, BufWriter, Write};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::graph::assembler::Contig;
use crate::graph::debruijn::DeBruijnGraph;

/// Line-oriented output, gzip-compressed when the path ends in `.gz`.
pub enum SequenceWriter {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

impl SequenceWriter {
    pub fn create(path: &str) -> io::Result<Self> {
        let file = File::create(path)?;
        if path.ends_with(".gz") {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(SequenceWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(SequenceWriter::Plain(BufWriter::new(file)))
        }
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            SequenceWriter::Plain(writer) => writeln!(writer, "{}", line),
            SequenceWriter::Compressed(writer) => writeln!(writer, "{}", line),
        }
    }

    pub fn write_contig(&mut self, contig: &Contig) -> io::Result<()> {
        self.write_line(&contig.sequence)
    }

    /// Flushes buffered data and, for gzip output, writes the trailer.
    pub fn finish(self) -> io::Result<()> {
        match self {
            SequenceWriter::Plain(mut writer) => writer.flush(),
            SequenceWriter::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}

/// One contig per line, in emission order.
pub fn write_contigs(path: &str, contigs: &[Contig]) -> io::Result<()> {
    let mut writer = SequenceWriter::create(path)?;
    for contig in contigs {
        writer.write_contig(contig)?;
    }
    writer.finish()
}

/// One line per line of `lines`.
pub fn write_lines<I, S>(path: &str, lines: I) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = SequenceWriter::create(path)?;
    for line in lines {
        writer.write_line(line.as_ref())?;
    }
    writer.finish()
}

/// `source -> destination` for every distinct edge.
pub fn write_edges(path: &str, graph: &DeBruijnGraph) -> io::Result<()> {
    write_lines(
        path,
        graph
            .edges()
            .into_iter()
            .map(|(src, dst)| format!("{} -> {}", src, dst)),
    )
}
