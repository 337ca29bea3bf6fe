use gattrace_engine::{HandleReport, TimelineEntry};
use owo_colors::OwoColorize;

/// Print both report sections.
///
/// The text is identical with and without color; color only wraps pieces of
/// it, so scripted consumers can match on the plain form either way.
pub fn print_report(timeline: &[TimelineEntry], report: &HandleReport<'_>, enable_color: bool) {
    print_flow_summary(timeline, enable_color);
    print_handle_details(report, enable_color);
}

fn print_flow_summary(timeline: &[TimelineEntry], enable_color: bool) {
    println!();
    if enable_color {
        println!("{}", "=== Communication Flow Summary ===".bold());
    } else {
        println!("=== Communication Flow Summary ===");
    }

    for entry in timeline {
        let rel_time = format!("+{:.3}s", entry.rel_time);
        let handle = format!("0x{:04x}", entry.handle);
        let summary = entry
            .data_summary
            .as_ref()
            .map(|data| format!(": {}", data))
            .unwrap_or_default();

        if enable_color {
            println!(
                "{} Frame {}: Handle {} - {}{}",
                rel_time.bright_black(),
                entry.frame,
                handle.cyan(),
                paint_operation(&entry.operation_name),
                summary
            );
        } else {
            println!(
                "{} Frame {}: Handle {} - {}{}",
                rel_time, entry.frame, handle, entry.operation_name, summary
            );
        }
    }
}

fn print_handle_details(report: &HandleReport<'_>, enable_color: bool) {
    println!();
    if enable_color {
        println!("{}", "=== Detailed Analysis by Handle ===".bold());
    } else {
        println!("=== Detailed Analysis by Handle ===");
    }

    for (handle, buckets) in report {
        let header = format!("Handle: 0x{:04x}", handle);
        println!();
        if enable_color {
            println!("{}", header.cyan().bold());
        } else {
            println!("{}", header);
        }

        for (type_name, bucket) in buckets {
            println!();
            if enable_color {
                println!(
                    "{} ({} operations):",
                    paint_operation(type_name),
                    bucket.operations.len()
                );
            } else {
                println!("{} ({} operations):", type_name, bucket.operations.len());
            }

            for op in &bucket.operations {
                let conn = op.connection.as_deref().unwrap_or("N/A");
                match op.data.as_deref() {
                    Some(data) if !data.is_empty() => {
                        println!("  Frame {} (Conn: {}): {}", op.frame, conn, data);
                    }
                    _ => println!("  Frame {} (Conn: {})", op.frame, conn),
                }
            }

            if let Some(combined) = &bucket.combined_data {
                println!();
                if enable_color {
                    println!("  Combined data: {}", combined.yellow());
                } else {
                    println!("  Combined data: {}", combined);
                }
            }
        }
    }
}

fn paint_operation(name: &str) -> String {
    if name.contains("Write") {
        format!("{}", name.yellow())
    } else if name.contains("Notification") || name.contains("Indication") {
        format!("{}", name.cyan())
    } else if name.starts_with("Error") || name.starts_with("Unknown") {
        format!("{}", name.red())
    } else if name.starts_with("Read") || name.starts_with("Find") {
        format!("{}", name.green())
    } else {
        name.to_string()
    }
}
