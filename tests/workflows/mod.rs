mod tests_client_workflows;
mod tests_load_save;
