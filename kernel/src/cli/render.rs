use owo_colors::OwoColorize;
use paster_kernel::reconcile::{ChangeAction, ChangeRecord, PreviewReport};
use supports_color::Stream;

pub fn color_enabled_stdout() -> bool {
    supports_color::on(Stream::Stdout).is_some()
}

pub fn sym_check(enabled: bool) -> String {
    if enabled { format!("{}", "✔".green().bold()) } else { "✔".to_string() }
}

pub fn sym_warn(enabled: bool) -> String {
    if enabled { format!("{}", "!".yellow().bold()) } else { "!".to_string() }
}

fn heading(title: &str, count: usize, color: bool) -> String {
    let text = format!("{title} ({count})");
    if color { format!("{}", text.bold()) } else { text }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn item(record: &ChangeRecord, color: bool) -> String {
    let (icon, status) = match record.action {
        ChangeAction::Create => ("+", record.action.label()),
        ChangeAction::Modify => ("~", record.action.label()),
    };
    let status = match (color, record.action) {
        (false, _) => status.to_string(),
        (true, ChangeAction::Create) => format!("{}", status.green()),
        (true, ChangeAction::Modify) => format!("{}", status.yellow()),
    };
    format!("  {icon} {}  {status}  {}", record.path, record.stats_label())
}

/// Renders the preview list grouped into new and modified files.
pub fn render_preview(records: &[ChangeRecord], color: bool) -> String {
    let report = PreviewReport::group(records);
    let mut out = String::new();

    if report.is_empty() {
        out.push_str("Nothing to preview.\n");
        return out;
    }

    if !report.created.is_empty() {
        push_line(&mut out, &heading("New Files", report.created.len(), color));
        for record in &report.created {
            push_line(&mut out, &item(record, color));
        }
    }

    if !report.modified.is_empty() {
        if !report.created.is_empty() {
            out.push('\n');
        }
        push_line(&mut out, &heading("Modified Files", report.modified.len(), color));
        for record in &report.modified {
            push_line(&mut out, &item(record, color));
        }
    }

    out
}

/// Renders both sides of a diff view one after the other.
pub fn render_diff(path: &str, original: &str, proposed: &str, color: bool) -> String {
    let old_header = format!("--- {path} (on disk)");
    let new_header = format!("+++ {path} (Preview)");
    let (old_header, new_header) = if color {
        (format!("{}", old_header.red()), format!("{}", new_header.green()))
    } else {
        (old_header, new_header)
    };
    format!("{old_header}\n{original}\n{new_header}\n{proposed}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, action: ChangeAction, old: &str, new: &str) -> ChangeRecord {
        ChangeRecord {
            path: path.to_string(),
            exists: action == ChangeAction::Modify,
            old_content: old.to_string(),
            new_content: new.to_string(),
            action,
        }
    }

    #[test]
    fn test_render_preview_groups() {
        let records = vec![
            record("src/a.rs", ChangeAction::Modify, "x", "x\ny\nz"),
            record("b.txt", ChangeAction::Create, "", "one"),
        ];
        let out = render_preview(&records, false);

        assert_eq!(
            out,
            "New Files (1)\n  + b.txt  NEW  1 line\n\nModified Files (1)\n  ~ src/a.rs  MODIFIED  3 lines (+2)\n"
        );
    }

    #[test]
    fn test_render_preview_created_only() {
        let records = vec![
            record("a.txt", ChangeAction::Create, "", "one\ntwo"),
            record("b.txt", ChangeAction::Create, "", ""),
        ];
        let out = render_preview(&records, false);

        assert_eq!(
            out,
            "New Files (2)\n  + a.txt  NEW  2 lines\n  + b.txt  NEW  1 line\n"
        );
    }

    #[test]
    fn test_render_empty_preview() {
        assert_eq!(render_preview(&[], false), "Nothing to preview.\n");
    }

    #[test]
    fn test_render_diff_plain() {
        let out = render_diff("a.txt", "old", "new", false);
        assert_eq!(out, "--- a.txt (on disk)\nold\n+++ a.txt (Preview)\nnew\n");
    }
}
