pub(crate) mod dashboard_shell;
