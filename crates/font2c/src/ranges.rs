//! Code point range parsing for the command line and config file.
//!
//! Accepts single values (`65`, `0x41`) and inclusive ranges
//! (`0x20-0x7E`, `32-126`).

use anyhow::{Context, bail};

/// Parse a list of range specs into a sorted, de-duplicated code point list.
pub fn parse_ranges(specs: &[String]) -> anyhow::Result<Vec<u32>> {
    let mut code_points = Vec::new();
    for spec in specs {
        let spec = spec.trim();
        if let Some((start, end)) = spec.split_once('-') {
            let start = parse_code_point(start).with_context(|| format!("Invalid range '{spec}'"))?;
            let end = parse_code_point(end).with_context(|| format!("Invalid range '{spec}'"))?;
            if start > end {
                bail!("Invalid range '{spec}': start is greater than end");
            }
            code_points.extend(start..=end);
        } else {
            code_points.push(parse_code_point(spec).with_context(|| format!("Invalid code point '{spec}'"))?);
        }
    }
    code_points.sort_unstable();
    code_points.dedup();
    Ok(code_points)
}

fn parse_code_point(text: &str) -> anyhow::Result<u32> {
    let text = text.trim();
    let value = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)?
    } else {
        text.parse()?
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_values() {
        let specs = vec!["65".to_string(), "0x41".to_string(), "0x20".to_string()];
        assert_eq!(parse_ranges(&specs).unwrap(), vec![0x20, 0x41]);
    }

    #[test]
    fn test_ranges() {
        let specs = vec!["0x20-0x23".to_string(), "34-36".to_string()];
        assert_eq!(parse_ranges(&specs).unwrap(), vec![0x20, 0x21, 0x22, 0x23, 0x24]);
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        let specs = vec!["0x400-0x402".to_string(), "0x30".to_string(), "0x401".to_string()];
        assert_eq!(parse_ranges(&specs).unwrap(), vec![0x30, 0x400, 0x401, 0x402]);
    }

    #[test]
    fn test_invalid_specs() {
        assert!(parse_ranges(&["xyz".to_string()]).is_err());
        assert!(parse_ranges(&["0x50-0x40".to_string()]).is_err());
        assert!(parse_ranges(&["0x20-".to_string()]).is_err());
    }
}
