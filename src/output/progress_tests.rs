use super::*;

#[test]
fn progress_bar_hidden_in_quiet_mode() {
    let progress = ConvertProgress::new_with_visibility(100, true, true);
    assert!(!progress.visible);
    progress.inc();
    progress.println("suppressed");
    progress.finish();
}

#[test]
fn progress_bar_hidden_without_tty() {
    let progress = ConvertProgress::new_with_visibility(10, false, false);
    assert!(!progress.visible);
    for _ in 0..10 {
        progress.inc();
    }
    progress.finish();
}

#[test]
fn progress_bar_visible_on_tty() {
    let progress = ConvertProgress::new_with_visibility(3, false, true);
    assert!(progress.visible);
    progress.inc();
    progress.finish();
}

#[test]
fn status_lines_are_written_as_plain_lines() {
    let mut buf = Vec::new();
    ConvertProgress::write_line(&mut buf, "Created: public/a.webp");
    assert_eq!(String::from_utf8(buf).unwrap(), "Created: public/a.webp\n");
}

#[test]
fn println_with_visible_bar_does_not_panic() {
    let progress = ConvertProgress::new_with_visibility(2, false, true);
    progress.println("Processing: public/a.png");
    progress.inc();
    progress.finish();
}
