//! Console renderer: `{2,3,5,7}`

use std::io::Write;

use anyhow::Result;

use super::listed;

/// Brace-delimited, comma-separated list terminated by a newline
pub fn render(flags: &[bool], count: usize) -> String {
    let items: Vec<String> = listed(flags, count).map(|p| p.to_string()).collect();
    format!("{{{}}}\n", items.join(","))
}

/// Write the rendered list to `out`
pub fn print<W: Write>(out: &mut W, flags: &[bool], count: usize) -> Result<()> {
    out.write_all(render(flags, count).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::{self, StepCounter};

    fn table(bound: usize) -> sieve::Sieve {
        sieve::run(bound, &mut StepCounter::new())
    }

    #[test]
    fn test_render_below_ten() {
        let s = table(10);
        assert_eq!(render(s.flags(), s.count()), "{2,3,5,7}\n");
    }

    #[test]
    fn test_render_empty_and_single() {
        let s = table(2);
        assert_eq!(render(s.flags(), s.count()), "{}\n");

        let s = table(3);
        assert_eq!(render(s.flags(), s.count()), "{2}\n");
    }

    #[test]
    fn test_render_count_mismatch() {
        let s = table(10);
        // Fewer requested than present: truncate
        assert_eq!(render(s.flags(), 2), "{2,3}\n");
        // More requested than present: no overrun, list still closed
        assert_eq!(render(s.flags(), 9), "{2,3,5,7}\n");
    }

    #[test]
    fn test_render_is_repeatable() {
        let s = table(50);
        assert_eq!(render(s.flags(), s.count()), render(s.flags(), s.count()));
    }

    #[test]
    fn test_print_writes_render() {
        let s = table(10);
        let mut out = Vec::new();
        print(&mut out, s.flags(), s.count()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{2,3,5,7}\n");
    }
}
