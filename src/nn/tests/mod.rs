mod module_trait;
