// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
      _           _          _     _
  ___(_)_ __ ___ | |__  _ __(_) __| | __ _  ___
 / __| | '_ ` _ \| '_ \| '__| |/ _` |/ _` |/ _ \
 \__ \ | | | | | | |_) | |  | | (_| | (_| |  __/
 |___/_|_| |_| |_|_.__/|_|  |_|\__,_|\__, |\___|
                                     |___/

    Simulation-to-JSON HTTP Bridge
"#;
    println!("{}", banner);
}
