use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use poslog::core::align::align;
use poslog::core::log_reader::load_log;
use poslog::core::resample::resample;
use poslog::{create_logs, process_file, ArtifactReader, Params, Result, Source, TimeBasis};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn begin() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn utc_params(freq: f64) -> Params {
    Params::new(begin(), freq).with_time_basis(TimeBasis::Utc)
}

fn write_raw(dir: &Path, name: &str, rows: &[(f64, f64, f64)]) -> std::path::PathBuf {
    let path = dir.join(name);
    let body: String = rows
        .iter()
        .map(|(t, x, y)| format!("{t},{x},{y}\n"))
        .collect();
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_process_single_file() -> Result<()> {
    let tmp = TempDir::new().unwrap();
    let src = write_raw(
        tmp.path(),
        "walk.csv",
        &[(0.0, 0.0, 0.0), (1.0, 10.0, 20.0), (2.0, 20.0, 40.0)],
    );
    let out = tmp.path().join("out");
    fs::create_dir(&out)?;

    let paths = process_file(&src, &out, &utc_params(2.0))?;
    assert_eq!(paths.text, out.join("walk.csv"));
    assert_eq!(paths.binary, out.join("walk.pkl"));

    let text = fs::read_to_string(&paths.text)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "2023-03-01 09:30:00.000000,0.0,0.0",
            "2023-03-01 09:30:00.500000,5.0,10.0",
            "2023-03-01 09:30:01.000000,10.0,20.0",
            "2023-03-01 09:30:01.500000,15.0,30.0",
            "2023-03-01 09:30:02.000000,20.0,40.0",
        ]
    );
    Ok(())
}

#[test]
fn test_artifact_matches_in_memory_series() -> Result<()> {
    let tmp = TempDir::new().unwrap();
    let src = write_raw(
        tmp.path(),
        "irregular.csv",
        &[
            (1_650_000_000.0, 1.0, -1.0),
            (1_650_000_000.37, 2.5, -0.5),
            (1_650_000_001.1, 3.0, 4.0),
            (1_650_000_002.9, -7.25, 8.0),
            (1_650_000_003.0, 0.0, 0.0),
        ],
    );
    let params = utc_params(10.0);

    let expected = align(&resample(&load_log(&src)?, &params)?, &params)?;
    let out = tmp.path().join("out");
    fs::create_dir(&out)?;
    let paths = process_file(&src, &out, &params)?;
    let reloaded = ArtifactReader::open(&paths.binary)?.into_series();

    assert_eq!(reloaded.len(), 31);
    assert_eq!(reloaded, expected);
    assert_eq!(reloaded.timestamps[0], begin());
    Ok(())
}

#[test]
fn test_aligned_spacing() -> Result<()> {
    let tmp = TempDir::new().unwrap();
    let src = write_raw(
        tmp.path(),
        "spacing.csv",
        &[(1_600_000_000.0, 0.0, 0.0), (1_600_000_010.0, 1.0, 1.0)],
    );
    let params = utc_params(4.0);
    let aligned = align(&resample(&load_log(&src)?, &params)?, &params)?;

    assert_eq!(aligned.len(), 41);
    for (i, t) in aligned.timestamps.iter().enumerate() {
        assert_eq!(*t, begin() + TimeDelta::microseconds(i as i64 * 250_000));
    }
    Ok(())
}

#[test]
fn test_batch_over_pattern() -> Result<()> {
    let tmp = TempDir::new().unwrap();
    let raw = tmp.path().join("logs");
    fs::create_dir(&raw)?;
    write_raw(&raw, "a.csv", &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)]);
    write_raw(&raw, "b.csv", &[(5.0, 0.0, 0.0), (7.0, 2.0, 2.0)]);
    let tgt = tmp.path().join("nested").join("formatted");

    let pattern = raw.join("*.csv").to_string_lossy().into_owned();
    let written = create_logs(&Source::Pattern(pattern), Some(&tgt), tmp.path(), &utc_params(1.0))?;

    assert_eq!(written.len(), 2);
    for name in ["a.csv", "a.pkl", "b.csv", "b.pkl"] {
        assert!(tgt.join(name).is_file(), "{name} missing");
    }
    Ok(())
}

#[test]
fn test_default_directories() -> Result<()> {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("raw"))?;
    write_raw(&root.path().join("raw"), "only.csv", &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)]);

    let written = create_logs(&Source::Default, None, root.path(), &utc_params(1.0))?;
    assert_eq!(written.len(), 1);
    assert!(root.path().join("formatted").join("only.csv").is_file());
    assert!(root.path().join("formatted").join("only.pkl").is_file());
    Ok(())
}

#[test]
fn test_failure_aborts_batch() {
    let tmp = TempDir::new().unwrap();
    let bad = write_raw(tmp.path(), "bad.csv", &[(0.0, 0.0, 0.0)]);
    fs::write(&bad, "0,0,0\n1,oops,1\n").unwrap();

    let out = tmp.path().join("out");
    let err = create_logs(&Source::File(bad), Some(&out), tmp.path(), &utc_params(1.0))
        .unwrap_err();
    assert!(err.is_format());
    assert!(!out.join("bad.csv").exists());
    assert!(!out.join("bad.pkl").exists());
}

#[test]
fn test_dotted_names_do_not_collide() -> Result<()> {
    let root = TempDir::new().unwrap();
    let raw = root.path().join("raw");
    fs::create_dir(&raw)?;
    write_raw(&raw, "run.1.csv", &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)]);
    write_raw(&raw, "run.2.csv", &[(0.0, 5.0, 5.0), (2.0, 7.0, 7.0)]);

    let written = create_logs(&Source::Default, None, root.path(), &utc_params(1.0))?;
    assert_eq!(written.len(), 2);
    assert_ne!(written[0].text, written[1].text);

    let formatted = root.path().join("formatted");
    for name in ["run.1.csv", "run.1.pkl", "run.2.csv", "run.2.pkl"] {
        assert!(formatted.join(name).is_file(), "{name} missing");
    }
    assert_eq!(fs::read_to_string(formatted.join("run.1.csv"))?.lines().count(), 2);
    assert_eq!(fs::read_to_string(formatted.join("run.2.csv"))?.lines().count(), 3);
    Ok(())
}
