// src/output.rs
use crate::error::{PricingError, PricingResult};
use crate::sweep::CurveSeries;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write curves sharing one underlying grid as `underlying,<label>,...` columns.
pub fn write_curves_to_csv<P: AsRef<Path>>(filename: P, curves: &[&CurveSeries]) -> PricingResult<()> {
    let first = curves.first().ok_or_else(|| PricingError::InvalidConfiguration {
        field: "curves".to_string(),
        reason: "nothing to write".to_string(),
    })?;
    let grid = first.underlyings();
    for curve in &curves[1..] {
        if curve.underlyings() != grid {
            return Err(PricingError::InvalidConfiguration {
                field: "curves".to_string(),
                reason: format!("'{}' is sampled on a different grid than '{}'", curve.label(), first.label()),
            });
        }
    }

    let mut file = BufWriter::new(File::create(filename)?);
    let header: Vec<&str> = curves.iter().map(|c| c.label()).collect();
    writeln!(file, "underlying,{}", header.join(","))?;
    for (i, s) in grid.iter().enumerate() {
        write!(file, "{}", s)?;
        for curve in curves {
            write!(file, ",{}", curve.points()[i].value)?;
        }
        writeln!(file)?;
    }
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::OptionType;
    use crate::sweep::CurvePoint;

    fn series(label: &str, grid: &[f64]) -> CurveSeries {
        let points = grid
            .iter()
            .map(|&underlying| CurvePoint { underlying, value: underlying / 10.0 })
            .collect();
        CurveSeries::new(label, OptionType::Call, points)
    }

    #[test]
    fn test_write_curves_to_csv() {
        let path = std::env::temp_dir().join(format!("bsm_greeks_curves_{}.csv", std::process::id()));
        let a = series("call_price", &[20.0, 40.0]);
        let b = series("put_price", &[20.0, 40.0]);
        write_curves_to_csv(&path, &[&a, &b]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["underlying,call_price,put_price", "20,2,2", "40,4,4"]);
    }

    #[test]
    fn test_mismatched_grids_rejected() {
        let path = std::env::temp_dir().join("bsm_greeks_never_written.csv");
        let a = series("delta", &[20.0, 40.0]);
        let b = series("gamma", &[20.0, 41.0]);
        assert!(matches!(
            write_curves_to_csv(&path, &[&a, &b]),
            Err(PricingError::InvalidConfiguration { .. })
        ));
        assert!(write_curves_to_csv(&path, &[]).is_err());
    }
}
