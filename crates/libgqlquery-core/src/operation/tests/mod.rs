mod argument_set_tests;
mod selection_tests;
