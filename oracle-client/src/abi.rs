//! Solidity ABI definitions of the contracts the oracle client interacts with
#![allow(missing_docs)]
#![allow(clippy::too_many_arguments)]

use alloy_sol_types::sol;

sol! {
    #[sol(rpc)]
    contract IERC20 {
        function decimals() external view returns (uint8);
        function symbol() external view returns (string);
    }
}

sol! {
    #[sol(rpc)]
    contract ICErc20 {
        function underlying() external view returns (address);
    }
}

sol! {
    #[sol(rpc)]
    contract IUniswapV2Router {
        function WETH() external view returns (address);
        function factory() external view returns (address);
    }
}

sol! {
    #[sol(rpc)]
    contract IUniswapV2Factory {
        function getPair(address tokenA, address tokenB) external view returns (address);
    }
}

sol! {
    #[sol(rpc)]
    contract IUniswapV2Pair {
        function token0() external view returns (address);
        function token1() external view returns (address);
    }
}

sol! {
    #[sol(rpc)]
    contract IOracle {
        struct TokenConfig {
            uint256 baseUnit;
            uint256 twapPeriod;
            uint8 priceSource;
            address uniswapMarket;
            bool isUniswapReversed;
            bool isPairWithStablecoin;
            address externalOracle;
        }

        function configExists(address underlying) external view returns (bool);
        function underlyings(address cToken) external view returns (address);
        function price(address underlying) external view returns (uint256);
        function numTokens() external view returns (uint256);

        function _setConfigs(address[] calldata underlyings, TokenConfig[] calldata configs) external;
        function _setUnderlyingForCTokens(address[] calldata cTokens, address[] calldata underlyings) external;
        function updatePrices(address[] calldata underlyings) external;
    }
}
