#[cfg(test)]
mod authz_tests;

#[cfg(test)]
mod guard_tests;

#[cfg(test)]
mod menu_tests;

#[cfg(test)]
mod payload_tests;

#[cfg(test)]
mod redirect_tests;
