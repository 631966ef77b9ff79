//! Startup banner and URL display

use super::config::is_all_interfaces;
use super::constants::APP_NAME;
use crate::utils::terminal::{Accent, banner_line, terminal_link};

/// What the banner reports about the running server
pub struct BannerInfo<'a> {
    pub host: &'a str,
    pub port: u16,
    pub backend: &'a str,
    pub car_count: u64,
    pub data_location: &'a str,
}

/// Print the startup banner with URLs
pub fn print_banner(info: &BannerInfo<'_>) {
    // Use localhost for display when binding to all interfaces
    let display_host = if is_all_interfaces(info.host) {
        "localhost"
    } else {
        info.host
    };
    let base = format!("http://{}:{}", display_host, info.port);

    println!();
    println!(
        "  \x1b[1m\x1b[36m{}\x1b[0m \x1b[90mv{}\x1b[0m",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!(
        "{}",
        banner_line(Accent::Green, "Cars API:", &terminal_link(&format!("{base}/api/cars")))
    );
    println!(
        "{}",
        banner_line(Accent::Yellow, "API docs:", &terminal_link(&format!("{base}/api-docs")))
    );

    if info.host == "127.0.0.1" || info.host == "localhost" {
        println!(
            "{}",
            banner_line(Accent::Dim, "Network:", "use --host 0.0.0.0 to expose")
        );
    } else if is_all_interfaces(info.host) {
        if let Ok(interfaces) = local_ip_address::list_afinet_netifas() {
            for (_, ip) in interfaces
                .iter()
                .filter(|(_, ip)| ip.is_ipv4() && !ip.is_loopback())
            {
                let url = format!("http://{}:{}", ip, info.port);
                println!("{}", banner_line(Accent::Green, "Network:", &terminal_link(&url)));
            }
        }
    } else {
        let url = format!("http://{}:{}", info.host, info.port);
        println!("{}", banner_line(Accent::Green, "Network:", &terminal_link(&url)));
    }

    println!(
        "{}",
        banner_line(
            Accent::Magenta,
            "Database:",
            &format!("{} ({} cars)", info.backend, info.car_count)
        )
    );
    println!("{}", banner_line(Accent::Dim, "Data:", info.data_location));
    println!();
}
