//! Common constants used throughout twinstack.

/// Extension of generated backend source files
pub const BACKEND_EXT: &str = "php";

/// Extension of generated frontend modules without JSX
pub const FRONTEND_EXT: &str = "ts";

/// Extension of generated frontend view components
pub const COMPONENT_EXT: &str = "tsx";

/// Suffix appended to the camelCase application name to form the API binding name
pub const API_SUFFIX: &str = "Api";

/// Suffix of the backend package directory and package name
pub const BACKEND_SUFFIX: &str = "-backend";

/// Suffix of the frontend package directory and package name
pub const FRONTEND_SUFFIX: &str = "-frontend";

/// Prefix of every backend route, followed by `/<organization>/<application>`
pub const ROUTE_PREFIX: &str = "/api";

/// Name of the REST resource every generated project is wired to
pub const RESOURCE: &str = "messages";

/// Root manifest file name
pub const MANIFEST_FILE: &str = "manifest.json";

/// Runtime requirements of the backend package
pub const COMPOSER_REQUIRE: [(&str, &str); 2] = [("php", "^8.1"), ("illuminate/support", "^10.0")];

/// Development requirements of the backend package
pub const COMPOSER_REQUIRE_DEV: [(&str, &str); 1] = [("orchestra/testbench", "^8.0")];

/// Runtime dependencies of the frontend package
pub const NPM_DEPENDENCIES: [(&str, &str); 3] =
    [("@reduxjs/toolkit", "^1.9.7"), ("react", "^18.2.0"), ("react-redux", "^8.1.3")];

/// Development dependencies of the frontend package
pub const NPM_DEV_DEPENDENCIES: [(&str, &str); 2] =
    [("@types/react", "^18.2.37"), ("typescript", "^5.2.2")];
