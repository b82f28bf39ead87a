//! CSV batch I/O: point triples in, classifications out.
//!
//! Input columns are `ax, ay, bx, by, cx, cy` (any numeric dtype; cast to
//! f64). A row with a missing coordinate or a degenerate segment is reported
//! in its record instead of failing the batch.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use geoprim::orient::{area_triangle_2d_with, orientation_2d_with, RelativePosition};
use geoprim::sample::{sample_triple, ReplayToken, SampleCfg};
use geoprim::{GeomCfg, Point2d};
use polars::prelude::*;
use serde::Serialize;

pub const COLUMNS: [&str; 6] = ["ax", "ay", "bx", "by", "cx", "cy"];

/// One input row; `None` when any coordinate is null.
pub type Triple = Option<[Point2d; 3]>;

/// Classification result for one input row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classified {
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<RelativePosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Counts per outcome, for logs and the provenance sidecar.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub rows: usize,
    pub classified: usize,
    pub failed: usize,
    pub on_segment: usize,
}

pub fn read_triples(path: &Path) -> Result<Vec<Triple>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select(
            COLUMNS
                .iter()
                .map(|name| col(*name).cast(DataType::Float64))
                .collect::<Vec<_>>(),
        )
        .collect()
        .with_context(|| format!("reading columns {COLUMNS:?} from {}", path.display()))?;

    let mut columns: Vec<Vec<Option<f64>>> = Vec::with_capacity(COLUMNS.len());
    for name in COLUMNS {
        columns.push(df.column(name)?.f64()?.into_iter().collect());
    }
    let rows = (0..df.height())
        .map(|i| {
            let v: Option<Vec<f64>> = columns.iter().map(|c| c[i]).collect();
            v.map(|v| {
                [
                    Point2d::xy(v[0], v[1]),
                    Point2d::xy(v[2], v[3]),
                    Point2d::xy(v[4], v[5]),
                ]
            })
        })
        .collect();
    Ok(rows)
}

pub fn classify_rows(rows: &[Triple], cfg: &GeomCfg) -> (Vec<Classified>, Summary) {
    let mut summary = Summary {
        rows: rows.len(),
        ..Summary::default()
    };
    let out = rows
        .iter()
        .enumerate()
        .map(|(row, triple)| {
            let mut rec = Classified {
                row,
                area: None,
                position: None,
                code: None,
                error: None,
            };
            let Some([a, b, c]) = *triple else {
                rec.error = Some("missing coordinate".to_string());
                summary.failed += 1;
                return rec;
            };
            let area = area_triangle_2d_with(a, b, c, cfg);
            rec.area = area.is_finite().then_some(area);
            match orientation_2d_with(a, b, c, cfg) {
                Ok(pos) => {
                    rec.position = Some(pos);
                    rec.code = Some(pos.code());
                    summary.classified += 1;
                    if pos.is_on_segment() {
                        summary.on_segment += 1;
                    }
                }
                Err(err) => {
                    rec.error = Some(err.to_string());
                    summary.failed += 1;
                }
            }
            rec
        })
        .collect();
    (out, summary)
}

/// Write `n` random triples as CSV with the [`COLUMNS`] header.
pub fn write_samples(path: &Path, n: usize, cfg: SampleCfg, seed: u64) -> Result<()> {
    let mut cols: [Vec<f64>; 6] = Default::default();
    for index in 0..n as u64 {
        let tri = sample_triple(cfg, ReplayToken { seed, index });
        for (k, p) in tri.iter().enumerate() {
            cols[2 * k].push(p.x());
            cols[2 * k + 1].push(p.y());
        }
    }
    let [ax, ay, bx, by, cx, cy] = cols;
    let mut df = df!(
        "ax" => ax,
        "ay" => ay,
        "bx" => bx,
        "by" => by,
        "cx" => cx,
        "cy" => cy
    )?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn classifies_csv_rows() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tri.csv");
        fs::write(
            &input,
            "ax,ay,bx,by,cx,cy\n\
             0,0,1,0,0,1\n\
             0,0,1,0,0,-1\n\
             0,0,2,0,1,0\n\
             1,1,1,1,2,2\n\
             0,0,1,0,,0\n",
        )
        .unwrap();
        let rows = read_triples(&input).unwrap();
        assert_eq!(rows.len(), 5);
        assert!(rows[4].is_none());

        let (out, summary) = classify_rows(&rows, &GeomCfg::default());
        assert_eq!(out[0].position, Some(RelativePosition::Left));
        assert_eq!(out[0].area, Some(0.5));
        assert_eq!(out[1].code, Some(RelativePosition::Right.code()));
        assert_eq!(out[2].position, Some(RelativePosition::Between));
        assert!(out[3].error.as_deref().unwrap().contains("degenerate"));
        assert_eq!(out[4].error.as_deref(), Some("missing coordinate"));
        assert_eq!(
            summary,
            Summary {
                rows: 5,
                classified: 3,
                failed: 2,
                on_segment: 1
            }
        );
    }

    #[test]
    fn nan_rows_fail_instead_of_landing_on_segment() {
        let nan = f64::NAN;
        let rows = vec![
            Some([Point2d::xy(0.0, 0.0), Point2d::xy(1.0, 0.0), Point2d::xy(nan, nan)]),
            Some([Point2d::xy(0.0, 0.0), Point2d::xy(nan, 0.0), Point2d::xy(0.5, 0.0)]),
            Some([Point2d::xy(0.0, 0.0), Point2d::xy(1.0, 0.0), Point2d::xy(0.5, 0.0)]),
        ];
        let (out, summary) = classify_rows(&rows, &GeomCfg::default());
        assert_eq!(out[0].position, None);
        assert_eq!(out[0].area, None);
        assert!(out[1].error.as_deref().unwrap().contains("non-finite"));
        assert_eq!(out[2].position, Some(RelativePosition::Between));
        assert_eq!(
            summary,
            Summary {
                rows: 3,
                classified: 1,
                failed: 2,
                on_segment: 1
            }
        );
    }

    #[test]
    fn samples_round_trip_through_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("samples.csv");
        write_samples(&path, 10, SampleCfg::default(), 5).unwrap();
        let rows = read_triples(&path).unwrap();
        assert_eq!(rows.len(), 10);
        let expected = sample_triple(SampleCfg::default(), ReplayToken { seed: 5, index: 3 });
        assert_eq!(rows[3], Some(expected));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_triples(&dir.path().join("nope.csv")).is_err());
    }
}
