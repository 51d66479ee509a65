//! Theme variables injected as an inline `<style>` ahead of the stylesheet.

pub const THEME_CSS: &str = r#"
:root {
    --color-dark-bg: #111827;
    --color-dark-surface: #1f2937;
    --color-dark-elevated: #273245;
    --color-border: #374151;
    --color-text-light: #f9fafb;
    --color-text-muted: #d1d5db;
    --color-accent-primary: #3b82f6;
    --color-accent-primary-hover: #2563eb;
    --color-accent-red: #ef4444;
    --color-accent-green: #22c55e;
    --font-primary: 'Inter', 'Segoe UI', sans-serif;
    --font-display: 'Poppins', 'Inter', sans-serif;
    --font-mono: 'Space Mono', 'Courier New', monospace;
    --border-radius-sm: 0.375rem;
    --border-radius-md: 0.5rem;
    --border-radius-lg: 0.75rem;
}
"#;
