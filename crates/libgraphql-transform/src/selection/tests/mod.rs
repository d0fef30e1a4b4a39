mod selection_navigator_tests;
