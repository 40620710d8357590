mod test_analyze;
mod test_history;
mod test_report;
mod test_run;
