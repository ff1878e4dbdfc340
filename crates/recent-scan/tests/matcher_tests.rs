use recent_scan::{CollectingSink, MatchConfig, Matcher, OutputMode, TimeWindow, WriterSink};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

const HOUR: u64 = 3600;
const DAY: u64 = 24 * HOUR;

fn set_age(path: &Path, now: SystemTime, age: Duration) {
    let file = File::open(path).unwrap();
    file.set_modified(now - age).unwrap();
}

/// Builds the layout used throughout:
///
/// ```text
/// .a    14 hours old
/// b     15 days old
/// c/    5 seconds old
/// c/d   2 hours old
/// c/e   over a year old
/// c/.f  4 days old
/// ```
fn setup_tree(now: SystemTime) -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join(".a"), "a").unwrap();
    fs::write(root.join("b"), "b").unwrap();
    fs::create_dir(root.join("c")).unwrap();
    fs::write(root.join("c/d"), "d").unwrap();
    fs::write(root.join("c/e"), "e").unwrap();
    fs::write(root.join("c/.f"), "f").unwrap();

    set_age(&root.join(".a"), now, Duration::from_secs(14 * HOUR));
    set_age(&root.join("b"), now, Duration::from_secs(15 * DAY));
    set_age(&root.join("c/d"), now, Duration::from_secs(2 * HOUR));
    set_age(&root.join("c/e"), now, Duration::from_secs(400 * DAY));
    set_age(&root.join("c/.f"), now, Duration::from_secs(4 * DAY));
    // Last, since creating the children touches the directory.
    set_age(&root.join("c"), now, Duration::from_secs(5));

    temp
}

fn config(now: SystemTime) -> MatchConfig {
    MatchConfig::builder().reference_time(now).build().unwrap()
}

fn under(root: &Path, names: &[&str]) -> Vec<String> {
    let mut names: Vec<String> = names
        .iter()
        .map(|n| format!("{}/{n}", root.display()))
        .collect();
    names.sort();
    names
}

fn scan(matcher: &Matcher, root: &Path) -> CollectingSink {
    let mut sink = CollectingSink::new();
    matcher.scan_directory(root, &mut sink);
    assert!(sink.errors.is_empty(), "unexpected errors: {:?}", sink.errors);
    sink
}

fn named(matcher: &Matcher, paths: &[PathBuf]) -> CollectingSink {
    let mut sink = CollectingSink::new();
    matcher.match_named(paths, &mut sink);
    assert!(sink.errors.is_empty(), "unexpected errors: {:?}", sink.errors);
    sink
}

#[test]
fn test_default_scan_reports_recent_directory() {
    let now = SystemTime::now();
    let temp = setup_tree(now);
    let matcher = Matcher::new(config(now));

    let sink = scan(&matcher, temp.path());

    assert_eq!(sink.sorted_names(), under(temp.path(), &["c/"]));
}

#[test]
fn test_inverted_scan_reports_stale_file() {
    let now = SystemTime::now();
    let temp = setup_tree(now);
    let matcher = Matcher::new(MatchConfig {
        invert: true,
        ..config(now)
    });

    let sink = scan(&matcher, temp.path());

    assert_eq!(sink.sorted_names(), under(temp.path(), &["b"]));
}

#[test]
fn test_named_directory_lists_children_not_itself() {
    let now = SystemTime::now();
    let temp = setup_tree(now);
    let matcher = Matcher::new(config(now));

    let sink = named(&matcher, &[temp.path().join("c")]);

    assert_eq!(sink.sorted_names(), under(temp.path(), &["c/d"]));
}

#[test]
fn test_no_slash_with_dots() {
    let now = SystemTime::now();
    let temp = setup_tree(now);
    let matcher = Matcher::new(MatchConfig {
        include_dots: true,
        no_slash: true,
        ..config(now)
    });

    let sink = scan(&matcher, temp.path());

    assert_eq!(sink.sorted_names(), under(temp.path(), &[".a", "c"]));
}

#[test]
fn test_named_dot_file_bypasses_filter() {
    let now = SystemTime::now();
    let temp = setup_tree(now);
    let matcher = Matcher::new(config(now));
    assert!(!matcher.config().include_dots);

    let sink = named(&matcher, &[temp.path().join(".a")]);

    assert_eq!(sink.sorted_names(), under(temp.path(), &[".a"]));
}

#[test]
fn test_star_expansion_matches_directory_contents() {
    let now = SystemTime::now();
    let temp = setup_tree(now);
    let matcher = Matcher::new(config(now));

    let sink = named(&matcher, &[temp.path().join("b"), temp.path().join("c")]);

    assert_eq!(sink.sorted_names(), under(temp.path(), &["c/d"]));
}

#[test]
fn test_inverted_two_days_with_dots() {
    let now = SystemTime::now();
    let temp = setup_tree(now);
    let threshold = TimeWindow::days(2).threshold().unwrap();
    let matcher = Matcher::new(MatchConfig {
        invert: true,
        include_dots: true,
        threshold,
        ..config(now)
    });

    let sink = named(&matcher, &[temp.path().join("b"), temp.path().join("c")]);

    assert_eq!(sink.sorted_names(), under(temp.path(), &["b", "c/.f", "c/e"]));
}

#[test]
fn test_scan_filters_dot_children_of_named_directory() {
    let now = SystemTime::now();
    let temp = setup_tree(now);
    let matcher = Matcher::new(MatchConfig {
        invert: true,
        ..config(now)
    });

    let sink = named(&matcher, &[temp.path().join("c")]);

    assert_eq!(sink.sorted_names(), under(temp.path(), &["c/e"]));
}

#[test]
fn test_missing_argument_is_reported() {
    let now = SystemTime::now();
    let temp = setup_tree(now);
    let matcher = Matcher::new(config(now));
    let mut sink = CollectingSink::new();

    let summary = matcher.match_named(
        [temp.path().join("missing"), temp.path().join("c")],
        &mut sink,
    );

    assert_eq!(sink.errors.len(), 1);
    assert_eq!(summary.errors, 1);
    assert_eq!(sink.sorted_names(), under(temp.path(), &["c/d"]));
}

#[test]
fn test_writer_sink_end_to_end() {
    let now = SystemTime::now();
    let temp = setup_tree(now);
    let matcher = Matcher::new(MatchConfig {
        include_dots: true,
        ..config(now)
    });
    let mut errors = 0;
    let mut sink = WriterSink::new(Vec::new(), OutputMode::Null, |_| errors += 1);

    matcher.match_named([temp.path().join("c")], &mut sink);

    assert!(sink.matched());
    let output = sink.finish().unwrap();
    assert_eq!(
        output,
        format!("{}/c/d\0", temp.path().display()).into_bytes()
    );
    assert_eq!(errors, 0);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_name_is_written_unchanged() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let now = SystemTime::now();
    let temp = TempDir::new().unwrap();
    let name = OsStr::from_bytes(b"caf\xe9.txt");
    fs::write(temp.path().join(name), "latin-1").unwrap();

    let matcher = Matcher::new(config(now));
    let mut sink = WriterSink::new(Vec::new(), OutputMode::Null, |_| {});
    matcher.scan_directory(temp.path(), &mut sink);
    let output = sink.finish().unwrap();

    let mut expected = temp.path().as_os_str().as_bytes().to_vec();
    expected.push(b'/');
    expected.extend_from_slice(name.as_bytes());
    expected.push(b'\0');
    assert_eq!(output, expected);

    let printed = Path::new(OsStr::from_bytes(&output[..output.len() - 1]));
    assert!(printed.exists());
}
