mod bracket;
