#[cfg(test)]
mod common;

#[cfg(test)]
mod location_tests;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod farm_work_list_tests;

#[cfg(test)]
mod farm_work_create_tests;

#[cfg(test)]
mod apply_tests;

#[cfg(test)]
mod withdraw_tests;

#[cfg(test)]
mod status_sweep_tests;

#[cfg(test)]
mod cancel_tests;
