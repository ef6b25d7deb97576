#[cfg(test)]
mod common;

#[cfg(test)]
mod form_cascade_tests;

#[cfg(test)]
mod attachment_tests;

#[cfg(test)]
mod reference_tests;

#[cfg(test)]
mod submission_tests;

#[cfg(test)]
mod login_flow_tests;
