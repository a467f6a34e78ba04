//! Global CSS styles for the registration app.
//!
//! Slate accents on a light page, red for errors.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAGE */
  --page-bg: #f3f4f6;
  --card-bg: #ffffff;

  /* SLATE (Actions, Links) */
  --slate: #64748b;
  --slate-dark: #334155;
  --slate-darker: #1e293b;

  /* TEXT */
  --text-primary: #374151;
  --text-muted: #6b7280;

  /* SEMANTIC */
  --danger: #ef4444;
  --border: #d1d5db;

  /* Typography */
  --font-sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-2xl: 1.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Page Layout === */
.register-page {
  width: 100%;
  min-height: 100vh;
  display: flex;
  justify-content: center;
  align-items: flex-start;
}

.register-container {
  width: 100%;
  padding: 8rem 1rem 2rem;
  display: flex;
  flex-direction: column;
  align-items: center;
}

/* === Registration Card === */
.registration-card {
  background: var(--card-bg);
  border-radius: 0.75rem;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  width: 83%;
  max-width: 36rem;
}

.registration-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  text-align: center;
  padding: 1rem 0;
}

.registration-form {
  display: flex;
  flex-direction: column;
  padding: 1.5rem 2rem 2rem;
  margin-bottom: 1rem;
}

.form-row {
  margin-bottom: 1rem;
}

.form-col {
  margin-bottom: 1rem;
}

@media (min-width: 768px) {
  .form-row {
    display: flex;
    justify-content: space-between;
    gap: 2rem;
  }

  .form-col {
    width: 50%;
    margin-bottom: 0;
  }
}

/* === Inputs === */
.form-field {
  margin-bottom: 1rem;
}

.form-col .form-field {
  margin-bottom: 0;
}

.input-label {
  display: block;
  margin-bottom: 0.5rem;
  font-size: var(--text-sm);
  font-weight: 700;
  color: var(--text-primary);
}

.input-field {
  width: 100%;
  padding: 0.5rem 0.75rem;
  font-size: var(--text-sm);
  line-height: 1.25;
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: 0.25rem;
  appearance: none;
  transition: box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  box-shadow: 0 0 0 3px rgba(100, 116, 139, 0.4);
}

.input-field--invalid {
  border-color: var(--danger);
}

.input-error {
  margin-top: 0.5rem;
  font-size: var(--text-xs);
  font-style: italic;
  color: var(--danger);
}

/* === Checkbox === */
.checkbox {
  accent-color: var(--slate);
}

.checkbox-label {
  margin-left: 0.5rem;
  font-size: var(--text-sm);
  font-weight: 700;
  color: var(--text-primary);
}

.checkbox-label--invalid {
  color: var(--danger);
}

/* === Buttons === */
.form-actions {
  margin-bottom: 1.5rem;
  text-align: center;
}

.btn-primary {
  padding: 0.5rem 1rem;
  font-weight: 700;
  color: #ffffff;
  background: var(--slate);
  border: none;
  border-radius: 9999px;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary:hover {
  background: var(--slate-dark);
}

.btn-primary:focus {
  outline: none;
  box-shadow: 0 0 0 3px rgba(100, 116, 139, 0.4);
}

.btn-block {
  width: 100%;
}

/* === Links === */
.form-divider {
  margin-bottom: 1.5rem;
  border: none;
  border-top: 1px solid var(--border);
}

.inert-link-row {
  text-align: center;
}

.inert-link {
  display: inline-block;
  font-size: var(--text-sm);
  color: var(--slate);
  cursor: default;
}

.inert-link:hover {
  color: var(--slate-darker);
}
"#;
