mod ip_allowlist;

pub use ip_allowlist::require_allowlisted_ip;
