mod fetch_tests;
