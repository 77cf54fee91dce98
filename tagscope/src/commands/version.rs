/// Get the version string for tagscope and libtagscope
pub fn get_version_string() -> String {
    format!(
        "tagscope {}\nlibtagscope {}",
        env!("CARGO_PKG_VERSION"),
        libtagscope::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
