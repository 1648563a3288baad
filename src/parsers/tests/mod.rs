mod text_parser_tests;
