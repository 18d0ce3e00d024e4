use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::{
    markup::Segment,
    render::{EMPTY_MESSAGE, LOADING_MESSAGE, Section, Unit},
};

/// Terminal counterpart of the HTML section.
///
/// Without colour, highlighted runs are wrapped in `**` so they stay visible in logs and pipes.
pub struct TerminalRenderer {
    pub color: bool,
}

impl TerminalRenderer {
    pub fn write_section(&self, out: &mut impl Write, section: &Section<'_>) -> io::Result<()> {
        match section {
            Section::Loading => writeln!(out, "{LOADING_MESSAGE}"),
            Section::Empty => writeln!(out, "{EMPTY_MESSAGE}"),
            Section::Units(units) => {
                for (i, unit) in units.iter().enumerate() {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    self.write_unit(out, unit)?;
                }
                Ok(())
            }
        }
    }

    fn write_unit(&self, out: &mut impl Write, unit: &Unit<'_>) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", unit.title.bold())?;
        } else {
            writeln!(out, "{}", unit.title)?;
        }
        if let Some(link) = unit.link {
            if self.color {
                writeln!(out, "  {}", link.underline())?;
            } else {
                writeln!(out, "  {link}")?;
            }
        }
        if !unit.author.is_empty() {
            write!(out, "  ")?;
            self.write_segments(out, &unit.author)?;
            writeln!(out)?;
        }

        let meta: Vec<&str> = [unit.year, unit.venue].into_iter().flatten().collect();
        if !meta.is_empty() {
            let meta = meta.join(" · ");
            if self.color {
                writeln!(out, "  {}", meta.dimmed())?;
            } else {
                writeln!(out, "  {meta}")?;
            }
        }
        Ok(())
    }

    pub fn write_segments(&self, out: &mut impl Write, segments: &[Segment<'_>]) -> io::Result<()> {
        for seg in segments {
            match (seg.is_strong(), self.color) {
                (false, _) => write!(out, "{}", seg.text)?,
                (true, true) => write!(out, "{}", seg.text.bold())?,
                (true, false) => write!(out, "**{}**", seg.text)?,
            }
        }
        Ok(())
    }
}
