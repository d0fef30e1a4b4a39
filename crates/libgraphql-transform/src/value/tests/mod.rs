mod inline_value_tests;
