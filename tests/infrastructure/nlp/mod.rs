mod summarizer_factory_test;
