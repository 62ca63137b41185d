use crate::plotter::Curve;
use csv::Writer;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// `arg` column followed by one column per curve label.
fn headers(curves: &[Curve], arg: &str) -> Vec<String> {
    let mut headers_with_x = Vec::with_capacity(curves.len() + 1);
    headers_with_x.push(arg.to_string());
    headers_with_x.extend(curves.iter().map(|c| c.label.clone()));
    headers_with_x
}

/// All curves of one plot share the sampled axis, so the rows follow the first curve.
fn rows(curves: &[Curve]) -> impl Iterator<Item = Vec<String>> + '_ {
    let n = curves.first().map_or(0, |c| c.x.len());
    (0..n).map(move |i| {
        let mut row_data = Vec::with_capacity(curves.len() + 1);
        row_data.push(curves[0].x[i].to_string());
        row_data.extend(
            curves
                .iter()
                .map(|c| c.y.get(i).map_or(String::new(), |v| v.to_string())),
        );
        row_data
    })
}

/// tab separated text
pub fn save_curves_to_file(
    curves: &[Curve],
    arg: &str,
    filename: impl AsRef<Path>,
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "{}", headers(curves, arg).join("\t"))?;
    for row_data in rows(curves) {
        writeln!(file, "{}", row_data.join("\t"))?;
    }
    Ok(())
}

pub fn save_curves_to_csv(
    curves: &[Curve],
    arg: &str,
    filename: impl AsRef<Path>,
) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    writer.write_record(&headers(curves, arg))?;
    for row_data in rows(curves) {
        writer.write_record(&row_data)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use tempfile::tempdir;

    fn curves() -> Vec<Curve> {
        let x = array![0.0, 0.5, 1.0];
        vec![
            Curve::new("x", x.clone(), x.clone()),
            Curve::new("2, x", x.clone(), x.mapv(|v| 2.0 * v)),
        ]
    }

    #[test]
    fn test_csv_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curves.csv");
        save_curves_to_csv(&curves(), "x", &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(header, vec!["x", "x", "2, x"]);
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(&records[1][0], "0.5");
        assert_eq!(&records[2][2], "2");
    }

    #[test]
    fn test_tab_separated_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curves.txt");
        save_curves_to_file(&curves(), "t", &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "t\tx\t2, x");
        assert_eq!(lines[3], "1\t1\t2");
    }

    #[test]
    fn test_no_curves_gives_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        save_curves_to_csv(&[], "x", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x\n");
    }
}
