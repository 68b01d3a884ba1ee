#[test]
fn logger_initializes_once_and_accepts_writes() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Point the data dir at a scratch location (honored on Linux; the
    // platform default is used elsewhere, which is fine for this test).
    unsafe { std::env::set_var("XDG_DATA_HOME", dir.path()) };

    paintbox::logger::init();
    paintbox::logger::init(); // second call is a no-op

    paintbox::log_info!("session test message {}", 42);
    paintbox::log_warn!("warn path");
    paintbox::log_err!("error path");

    let path = paintbox::logger::log_path().expect("log path set");
    assert!(path.exists());
}
