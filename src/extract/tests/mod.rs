mod html_rules_tests;
