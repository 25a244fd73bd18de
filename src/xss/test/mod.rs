mod info_test;
