//! Application-wide constants for content-assistant.
//!
//! Centralizes all magic numbers and user-facing strings to improve
//! maintainability and make the codebase self-documenting.

use std::time::Duration;

// ============================================================================
// Application Identity
// ============================================================================

/// GTK Application ID following reverse-DNS convention.
pub const APP_ID: &str = "com.github.content-assistant";

/// Application name displayed in the window title.
pub const APP_NAME: &str = "Asistente de Contenido Educativo";

// ============================================================================
// Window Configuration
// ============================================================================

/// Default window width in pixels.
pub const DEFAULT_WINDOW_WIDTH: i32 = 900;

/// Default window height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 760;

// ============================================================================
// Backend Service
// ============================================================================

/// Base URL used when no configuration file exists yet.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Endpoint producing a bilingual summary.
pub const SUMMARIZE_PATH: &str = "/summarize";

/// Endpoint producing bilingual key-point lists.
pub const KEY_POINTS_PATH: &str = "/key-points";

/// HTTP request timeout for backend operations.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// ============================================================================
// Accessibility
// ============================================================================

/// Smallest selectable font size.
pub const MIN_FONT_SIZE_PX: i32 = 12;

/// Largest selectable font size.
pub const MAX_FONT_SIZE_PX: i32 = 24;

/// Font size applied at startup.
pub const DEFAULT_FONT_SIZE_PX: i32 = 16;

// ============================================================================
// User-Facing Strings
// ============================================================================
// The product is Spanish-first; result column headings pair Spanish with
// English to match the bilingual output.

pub const MSG_EMPTY_INPUT_SUMMARY: &str = "Por favor, ingresa el texto a resumir.";
pub const MSG_EMPTY_INPUT_KEY_POINTS: &str =
    "Por favor, ingresa el texto para extraer los puntos clave.";

pub const MSG_SUMMARY_SUCCESS: &str = "¡Resumen generado exitosamente en ambos idiomas!";
pub const MSG_KEY_POINTS_SUCCESS: &str = "¡Puntos clave generados exitosamente en ambos idiomas!";

pub const MSG_SUMMARY_MALFORMED: &str = "Error: El backend no devolvió los resúmenes esperados.";
pub const MSG_KEY_POINTS_MALFORMED: &str =
    "Error: El backend no devolvió los puntos clave esperados.";

pub const MSG_CONNECTION_ERROR: &str =
    "Error de conexión con el backend. Verifica que el servicio esté disponible.";

pub const ERR_PREFIX_SUMMARY: &str = "Error al procesar el resumen";
pub const ERR_PREFIX_KEY_POINTS: &str = "Error al procesar los puntos clave";

pub const BTN_SUMMARY: &str = "Generar Resumen Bilingüe";
pub const BTN_SUMMARY_PENDING: &str = "Generando Resumen...";
pub const BTN_KEY_POINTS: &str = "Extraer Puntos Clave Bilingües";
pub const BTN_KEY_POINTS_PENDING: &str = "Extrayendo Puntos...";

pub const LOADING_TEXT: &str = "Cargando contenido...";
pub const PLACEHOLDER_TEXT: &str = "Tu resumen o puntos clave bilingües aparecerán aquí.";
pub const INPUT_CAPTION: &str = "Pega aquí el texto educativo que deseas procesar \
(por ejemplo, un párrafo de un libro de texto o apuntes de clase).";
