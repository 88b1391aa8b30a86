#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_client_tests;

#[cfg(test)]
mod login_proxy_tests;

#[cfg(test)]
mod restore_tests;

#[cfg(test)]
mod rate_limit_tests;

#[cfg(test)]
mod login_limit_tests;
