//! # Wire Constants
//!
//! Message strings and pagination fallbacks shared by the handlers. The
//! strings are part of the public contract: existing clients match on them
//! byte for byte, so they must never be reworded.

/// Rejection message for malformed ids, bodies and query parameters
pub const INVALID_PARAMETERS: &str = "Parámetros inválidos.";

/// Rejection message when the requested page starts past the last record
pub const NO_ENOUGH_POEMS: &str = "No hay suficientes poemas para mostrar en esta página.";

/// Lookup miss message
pub const POEM_NOT_FOUND: &str = "Poema no encontrado.";

/// Shared-secret mismatch message
pub const NOT_AUTHORIZED_MSG: &str = "Usted no está autorizado para realizar esta acción.";

/// Opaque message for any store fault
pub const INTERNAL_SERVER_ERROR_MSG: &str = "Ha ocurrido un error interno en el servidor.";

/// Update success message
pub const POEM_UPDATED: &str = "Poema actualizado satisfactoriamente.";

/// Delete success message
pub const POEM_DELETED: &str = "Poema eliminado satisfactoriamente.";

/// Page size used when the list request does not supply a usable `quantity`
pub const DEFAULT_QUANTITY: i64 = 10;

/// Page number used when the list request does not supply a usable `page`
pub const DEFAULT_PAGE: i64 = 1;
