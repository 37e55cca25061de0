//! Global CSS styles for the Character Catalog.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #0f1417;
  --surface-raised: #172026;
  --surface-border: #24313a;

  /* Portal green (primary accent) */
  --portal: #97ce4c;
  --portal-glow: rgba(151, 206, 76, 0.3);

  /* Text */
  --text-primary: #f2f5f3;
  --text-secondary: rgba(242, 245, 243, 0.72);
  --text-muted: rgba(242, 245, 243, 0.5);

  /* Status */
  --alive: #55cc44;
  --dead: #d63d2e;
  --unknown: #9e9e9e;
  --danger: #ff5c5c;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;

  --radius: 10px;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--surface);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  min-height: 100vh;
}

button {
  font: inherit;
  cursor: pointer;
}

button:disabled {
  cursor: not-allowed;
  opacity: 0.5;
}

/* === Shell === */
.app-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.app-main {
  flex: 1;
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.app-footer {
  padding: 1.25rem;
  text-align: center;
  color: var(--text-muted);
  font-size: var(--text-sm);
  border-top: 1px solid var(--surface-border);
}

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: var(--surface-raised);
  border-bottom: 1px solid var(--surface-border);
}

.nav-header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
}

.nav-title {
  color: var(--portal);
  font-size: var(--text-lg);
  font-weight: 700;
  text-decoration: none;
}

.identity-menu {
  position: relative;
}

.identity-trigger {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  background: transparent;
  border: 1px solid var(--surface-border);
  border-radius: 999px;
  color: var(--text-primary);
  padding: 0.25rem 0.75rem 0.25rem 0.25rem;
}

.identity-avatar {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 1.75rem;
  height: 1.75rem;
  border-radius: 50%;
  background: var(--portal);
  color: var(--surface);
  font-weight: 700;
}

.identity-dropdown {
  position: absolute;
  right: 0;
  top: calc(100% + 0.5rem);
  min-width: 220px;
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: var(--radius);
  padding: 0.5rem 0;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
}

.identity-summary {
  padding: 0.5rem 1rem;
}

.identity-name {
  font-weight: 600;
}

.identity-job {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.menu-divider {
  border: none;
  border-top: 1px solid var(--surface-border);
  margin: 0.25rem 0;
}

.menu-item {
  display: block;
  width: 100%;
  text-align: left;
  background: transparent;
  border: none;
  color: var(--text-primary);
  padding: 0.5rem 1rem;
}

.menu-item:hover {
  background: rgba(255, 255, 255, 0.05);
}

.menu-item--danger {
  color: var(--danger);
}

/* === Buttons === */
.btn-primary, .btn-secondary {
  border-radius: var(--radius);
  padding: 0.6rem 1.25rem;
  transition: background var(--transition-fast);
}

.btn-primary {
  background: var(--portal);
  border: 1px solid var(--portal);
  color: var(--surface);
  font-weight: 600;
}

.btn-secondary {
  background: transparent;
  border: 1px solid var(--surface-border);
  color: var(--text-primary);
}

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.65);
}

.profile-modal, .character-modal {
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: var(--radius);
  padding: 1.5rem;
  width: min(92vw, 440px);
  max-height: 90vh;
  overflow-y: auto;
}

.character-modal {
  width: min(92vw, 640px);
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.modal-title {
  font-size: var(--text-lg);
  margin-bottom: 1rem;
}

.modal-header .modal-title {
  margin-bottom: 0;
}

.modal-close {
  background: transparent;
  border: none;
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
  margin-top: 1.25rem;
}

.modal-image {
  width: 100%;
  max-width: 300px;
  border-radius: var(--radius);
  margin-bottom: 1rem;
}

/* === Forms === */
.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  margin-bottom: 1rem;
}

.form-label {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.form-input {
  background: var(--surface);
  border: 1px solid var(--surface-border);
  border-radius: var(--radius);
  color: var(--text-primary);
  padding: 0.6rem 0.75rem;
}

.form-input:focus {
  outline: none;
  border-color: var(--portal);
  box-shadow: 0 0 0 3px var(--portal-glow);
}

.form-hint {
  color: var(--text-muted);
  font-size: var(--text-xs);
}

/* === Catalog === */
.catalog-header {
  margin-bottom: 1.5rem;
}

.page-title {
  font-size: var(--text-xl);
}

.character-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1rem;
  transition: opacity var(--transition-fast);
}

.character-grid--busy {
  opacity: 0.55;
}

.character-card {
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: var(--radius);
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.character-card:hover {
  transform: translateY(-2px);
  border-color: var(--portal);
}

.character-card--disabled {
  cursor: progress;
}

.card-image img {
  display: block;
  width: 100%;
  aspect-ratio: 1;
  object-fit: cover;
}

.card-body {
  padding: 0.75rem;
}

.card-name {
  font-size: var(--text-base);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.card-meta {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.status-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  background: var(--unknown);
}

.status-dot--alive { background: var(--alive); }
.status-dot--dead { background: var(--dead); }

/* === Pagination === */
.pagination {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: 0.4rem;
  margin-top: 2rem;
}

.page-btn {
  min-width: 2.25rem;
  background: transparent;
  border: 1px solid var(--surface-border);
  border-radius: var(--radius);
  color: var(--text-primary);
  padding: 0.4rem 0.75rem;
}

.page-btn--active {
  background: var(--portal);
  border-color: var(--portal);
  color: var(--surface);
  font-weight: 600;
}

.page-ellipsis, .page-label {
  color: var(--text-muted);
  padding: 0 0.4rem;
}

/* === Details === */
.detail-fields {
  display: grid;
  grid-template-columns: max-content 1fr;
  gap: 0.35rem 1rem;
  margin-bottom: 1.25rem;
}

.detail-field {
  display: contents;
}

.detail-field dt {
  color: var(--text-muted);
}

.episode-heading {
  font-size: var(--text-base);
  margin-bottom: 0.5rem;
}

.episode-list ul {
  list-style: none;
  margin-bottom: 0.75rem;
}

.episode-list li {
  padding: 0.3rem 0;
  border-bottom: 1px solid var(--surface-border);
}

.episode-code {
  color: var(--portal);
  font-weight: 600;
}

.episode-date, .refresh-note {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Feedback === */
.error-banner {
  border: 1px solid var(--danger);
  border-radius: var(--radius);
  color: var(--danger);
  padding: 0.75rem 1rem;
  margin-bottom: 1rem;
}

.error-detail {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.loading-state, .empty-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  padding: 2rem;
  color: var(--text-muted);
}

.loading-spinner {
  width: 2rem;
  height: 2rem;
  border: 3px solid var(--surface-border);
  border-top-color: var(--portal);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}
"#;
