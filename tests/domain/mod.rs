mod analysis_result_test;
