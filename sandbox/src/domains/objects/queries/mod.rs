mod get_object;
